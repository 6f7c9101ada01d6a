use crate::config::Config;
use sqlx::SqlitePool;

/// Shared context for one process: configuration plus the store handle.
/// Constructed once in `main` and passed by reference to every component.
pub struct AppState {
    pub config: Config,
    pub db_pool: SqlitePool,
}
