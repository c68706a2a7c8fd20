//! Log entry types and request validation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, FieldIssue};

/// Longest accepted title, counted in characters.
pub const MAX_TITLE_LEN: usize = 120;

/// A logbook entry as stored and served. `id` and `isoTime` are
/// store-assigned and null only before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    #[serde(rename = "isoTime")]
    #[sqlx(rename = "isoTime")]
    pub iso_time: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Creation payload for `POST /entries`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewEntry {
    pub title: String,
    pub body: String,
    /// Accepted on the wire but always replaced by the server clock.
    #[serde(rename = "isoTime")]
    pub iso_time: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl NewEntry {
    /// Checks that go beyond what deserialization already enforces.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::Validation(vec![FieldIssue::new(
                &["body", "title"],
                format!("String should have at most {MAX_TITLE_LEN} characters"),
                "string_too_long",
            )]));
        }
        Ok(())
    }
}
