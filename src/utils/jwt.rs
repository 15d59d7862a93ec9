use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use varsity_core::AppError;
use varsity_models::auth::Claims;
use varsity_models::users::UserRole;

/// Creates a signed token carrying `{id, role}` claims.
///
/// Called twice per login, once with the access secret/TTL and once with
/// the refresh pair.
pub fn create_token(
    user_id: &str,
    role: UserRole,
    secret: &str,
    expires_in: i64,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        id: user_id.to_string(),
        role,
        exp: (now + expires_in) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
