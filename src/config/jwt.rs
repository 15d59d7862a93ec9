use std::env;

use anyhow::Context;

/// JWT signing configuration. Access and refresh tokens use distinct
/// secrets and distinct lifetimes.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: i64,
    pub refresh_secret: String,
    pub refresh_expires_in: i64,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            expires_in: env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86_400), // 1 day
            refresh_secret: env::var("JWT_REFRESH_SECRET")
                .context("JWT_REFRESH_SECRET must be set")?,
            refresh_expires_in: env::var("JWT_REFRESH_EXPIRES_IN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(31_536_000), // 365 days
        })
    }
}
