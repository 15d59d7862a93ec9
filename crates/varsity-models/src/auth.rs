use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserRole;

/// Claims carried by both the access and the refresh token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Business identifier of the user (e.g. `S-00001`).
    pub id: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

/// Login request body. `id` is the business identifier, not the database
/// record id.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub needs_password_change: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            id: "S-00001".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = LoginRequest {
            id: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            id: "S-00001".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_response_wire_casing() {
        let response = LoginResponse {
            access_token: "a.b.c".to_string(),
            refresh_token: "d.e.f".to_string(),
            needs_password_change: true,
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains(r#""accessToken":"a.b.c""#));
        assert!(serialized.contains(r#""refreshToken":"d.e.f""#));
        assert!(serialized.contains(r#""needsPasswordChange":true"#));
    }
}
