//! Service entrypoint: loads the environment, opens or creates the
//! database, seeds it on first start, and serves the HTTP façade.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use unit_logbook::{app_router, load_seed_file, store, AppState};

/// Fixed relative location of the SQLite database file.
const DB_PATH: &str = "logbook.db";
/// Fixed relative location of the bundled seed dataset.
const SEED_PATH: &str = "sample-data/data.json";
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unit_logbook=info".parse()?))
        .init();

    let options = SqliteConnectOptions::new()
        .filename(DB_PATH)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    let seeds = load_seed_file(Path::new(SEED_PATH)).await?;
    store::init(&pool, &seeds).await?;

    let app = app_router(AppState { pool });

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_PORT,
    };
    let listener = TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
