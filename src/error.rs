//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("validation: {} issue(s)", .0.len())]
    Validation(Vec<FieldIssue>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("seed data: {0}")]
    SeedData(String),
}

/// One field-level validation problem in the `loc`/`msg`/`type` wire shape.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct FieldIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldIssue {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        FieldIssue {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Client-facing failure body: `{"detail": <message>}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// Unprocessable-entity body: `{"detail": [<issue>, ...]}`.
#[derive(Serialize, ToSchema)]
pub struct ValidationBody {
    pub detail: Vec<FieldIssue>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: msg.to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody { detail: issues }),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                internal_error()
            }
            AppError::SeedData(msg) => {
                tracing::error!(error = %msg, "seed data failure");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}
