//! Entry handlers: list, read, create.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};

use crate::entry::{LogEntry, NewEntry};
use crate::error::{AppError, ErrorBody, FieldIssue, ValidationBody};
use crate::state::AppState;
use crate::store;

fn parse_entry_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| {
        AppError::Validation(vec![FieldIssue::new(
            &["path", "entry_id"],
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        )])
    })
}

/// Current UTC time as ISO-8601 with microsecond precision and a trailing
/// `Z`. Fixed width, so the textual order of stored rows matches the clock.
fn server_iso_time() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    AppError::Validation(vec![FieldIssue::new(
        &["body"],
        rejection.body_text(),
        "json_invalid",
    )])
}

#[utoipa::path(
    get,
    path = "/entries",
    responses(
        (status = 200, description = "All entries ordered by isoTime ascending", body = [LogEntry])
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let entries = store::list_all(&state.pool).await?;
    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    get,
    path = "/entries/{entry_id}",
    params(("entry_id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry", body = LogEntry),
        (status = 404, description = "No entry with that id", body = ErrorBody),
        (status = 422, description = "Non-integer id", body = ValidationBody)
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_entry_id(&entry_id)?;
    let entry = store::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Entry not found"))?;
    Ok((StatusCode::OK, Json(entry)))
}

#[utoipa::path(
    post,
    path = "/entries",
    request_body = NewEntry,
    responses(
        (status = 201, description = "The persisted entry", body = LogEntry),
        (status = 422, description = "Shape or length violation", body = ValidationBody)
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(new_entry) = payload.map_err(body_rejection)?;
    new_entry.validate()?;
    // the client-supplied isoTime is discarded; the server clock wins
    let iso_time = server_iso_time();
    let entry = store::insert(&state.pool, &new_entry, &iso_time).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
