//! Unit logbook: a record-keeping service over a single SQLite table.

pub mod entry;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use entry::{LogEntry, NewEntry, MAX_TITLE_LEN};
pub use error::{AppError, FieldIssue};
pub use routes::app_router;
pub use seed::{load_seed_file, SeedEntry};
pub use state::AppState;
