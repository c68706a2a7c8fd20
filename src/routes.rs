//! Router assembly, health check, and the OpenAPI document.

use axum::{routing::get, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;

use crate::entry::{LogEntry, NewEntry};
use crate::error::{ErrorBody, FieldIssue, ValidationBody};
use crate::handlers;
use crate::state::AppState;

/// Request bodies beyond this are refused at the transport layer.
const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Unit Logbook API", version = "1.0.0"),
    paths(
        health,
        handlers::list_entries,
        handlers::get_entry,
        handlers::create_entry
    ),
    components(schemas(LogEntry, NewEntry, ErrorBody, ValidationBody, FieldIssue))
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String))
)]
async fn health() -> Json<&'static str> {
    Json("OK")
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full application router: GET /health, GET+POST /entries,
/// GET /entries/:entry_id, GET /openapi.json.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/entries/:entry_id", get(handlers::get_entry))
        .route("/openapi.json", get(openapi_document))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
