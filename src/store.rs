//! entries table DDL and persistence. One table, created at startup and
//! seeded from the bundled dataset only when empty.

use sqlx::SqlitePool;

use crate::entry::{LogEntry, NewEntry};
use crate::error::AppError;
use crate::seed::SeedEntry;

/// Create the entries table if missing, then seed it when empty. The
/// emptiness check and the seed batch commit as one transaction; a failed
/// seeding rolls back to an empty table. Idempotent: safe to run on every
/// process start.
pub async fn init(pool: &SqlitePool, seeds: &[SeedEntry]) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            isoTime TEXT NOT NULL,
            lat REAL,
            lon REAL
        )
        "#;
    sqlx::query(ddl).execute(pool).await?;

    let mut tx = pool.begin().await?;
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
        .fetch_one(&mut *tx)
        .await?;
    if count == 0 {
        for seed in seeds {
            sqlx::query(
                "INSERT INTO entries (title, body, isoTime, lat, lon) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&seed.title)
            .bind(&seed.body)
            .bind(&seed.iso_time)
            .bind(seed.lat)
            .bind(seed.lon)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        if !seeds.is_empty() {
            tracing::info!(count = seeds.len(), "seeded empty entries table");
        }
    }
    Ok(())
}

/// All entries, oldest first. Timestamps are written in a fixed-width UTC
/// format, so the textual sort is chronological.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<LogEntry>, AppError> {
    let entries = sqlx::query_as::<_, LogEntry>(
        "SELECT id, title, body, isoTime, lat, lon FROM entries ORDER BY isoTime ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<LogEntry>, AppError> {
    let entry = sqlx::query_as::<_, LogEntry>(
        "SELECT id, title, body, isoTime, lat, lon FROM entries WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(entry)
}

/// Persist a new entry under the server-assigned timestamp and return the
/// stored row. The client timestamp inside `entry` is never read here.
pub async fn insert(
    pool: &SqlitePool,
    entry: &NewEntry,
    iso_time: &str,
) -> Result<LogEntry, AppError> {
    let created = sqlx::query_as::<_, LogEntry>(
        "INSERT INTO entries (title, body, isoTime, lat, lon) VALUES (?, ?, ?, ?, ?) \
         RETURNING id, title, body, isoTime, lat, lon",
    )
    .bind(&entry.title)
    .bind(&entry.body)
    .bind(iso_time)
    .bind(entry.lat)
    .bind(entry.lon)
    .fetch_one(pool)
    .await?;
    tracing::debug!(id = ?created.id, "inserted entry");
    Ok(created)
}
