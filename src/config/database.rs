//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from [`AppConfig::database_url`] and
//! cloned into the application state. A connection failure here is fatal:
//! the process logs and exits rather than serving requests it cannot
//! handle.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;

pub async fn init_db_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}
