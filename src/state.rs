use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state: the connection pool plus the immutable
/// configuration loaded at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
}
