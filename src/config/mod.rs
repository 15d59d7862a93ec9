//! Application configuration.
//!
//! All configuration is read from environment variables exactly once at
//! startup into an immutable [`AppConfig`], which is then passed into the
//! components that need it. Nothing reads the environment after boot.
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP port (default 5000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DEFAULT_USER_PASSWORD`: password assigned to users created without one
//! - `JWT_SECRET` / `JWT_EXPIRES_IN`: access-token secret and TTL seconds
//! - `JWT_REFRESH_SECRET` / `JWT_REFRESH_EXPIRES_IN`: refresh-token pair

pub mod database;
pub mod jwt;

use std::env;

use anyhow::Context;

use jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub default_user_password: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            default_user_password: env::var("DEFAULT_USER_PASSWORD")
                .unwrap_or_else(|_| "univ-pass-123".to_string()),
            jwt: JwtConfig::from_env()?,
        })
    }
}
