//! Seed dataset loading for first-start population.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

/// One record of the bundled seed dataset: a log entry minus its id.
/// `isoTime` is required here since the stored column is NOT NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub title: String,
    pub body: String,
    #[serde(rename = "isoTime")]
    pub iso_time: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Reads the seed dataset from `path`. A missing file is not an error:
/// the service starts with an empty dataset and logs a warning. An
/// unreadable or malformed file aborts startup.
pub async fn load_seed_file(path: &Path) -> Result<Vec<SeedEntry>, AppError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "seed file not found, starting with an empty dataset");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::SeedData(format!("read {}: {}", path.display(), e)));
        }
    };
    let seeds: Vec<SeedEntry> = serde_json::from_str(&raw)
        .map_err(|e| AppError::SeedData(format!("parse {}: {}", path.display(), e)))?;
    Ok(seeds)
}
