use sqlx::PgPool;
use tracing::instrument;

use varsity_core::{AppError, verify_password};
use varsity_models::users::UserRole;

use crate::config::jwt::JwtConfig;
use crate::utils::jwt::create_token;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies credentials against the stored hash and issues the
    /// access/refresh token pair.
    ///
    /// A user without a stored hash is treated as passwordless and the
    /// comparison is skipped.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            user_id: String,
            role: UserRole,
            password: Option<String>,
            needs_password_change: bool,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT user_id, role, password, needs_password_change FROM users WHERE user_id = $1",
        )
        .bind(&dto.id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User does not found"))?;

        if let Some(hash) = &user.password {
            if !verify_password(&dto.password, hash)? {
                return Err(AppError::unauthorized("Password is incorrect"));
            }
        }

        let access_token = create_token(
            &user.user_id,
            user.role,
            &jwt_config.secret,
            jwt_config.expires_in,
        )?;
        let refresh_token = create_token(
            &user.user_id,
            user.role,
            &jwt_config.refresh_secret,
            jwt_config.refresh_expires_in,
        )?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            needs_password_change: user.needs_password_change,
        })
    }
}
