//! User account models and DTOs.
//!
//! Users carry the business identifier used for login (`A-00001`,
//! `S-00001`, `F-00001`), a role, and the forced-password-change flag. The
//! password hash is stored at rest but never part of the serialized model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::{PaginationOptions, deserialize_optional_bool};

/// Application roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Student,
    Faculty,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Faculty => "faculty",
        }
    }

    /// Prefix used when auto-generating business identifiers.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "A",
            Self::Student => "S",
            Self::Faculty => "F",
        }
    }
}

/// A user account. The password hash is intentionally absent.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub user_id: String,
    pub role: UserRole,
    pub needs_password_change: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a user.
///
/// The business identifier and the password are both optional: a missing
/// identifier is generated from the role prefix, a missing password falls
/// back to the configured default (with `needsPasswordChange` left true).
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 32))]
    pub user_id: Option<String>,
    pub role: UserRole,
    #[validate(length(min = 6))]
    pub password: Option<String>,
}

/// DTO for updating a user. Only provided fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub role: Option<UserRole>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub needs_password_change: Option<bool>,
}

/// Query parameters accepted by the user list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilterParams {
    pub search_term: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub needs_password_change: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Admin, UserRole::Student, UserRole::Faculty] {
            let serialized = serde_json::to_string(&role).unwrap();
            let parsed: UserRole = serde_json::from_str(&serialized).unwrap();
            assert_eq!(parsed, role);
        }
        assert_eq!(serde_json::to_string(&UserRole::Student).unwrap(), r#""student""#);
    }

    #[test]
    fn test_role_prefixes() {
        assert_eq!(UserRole::Admin.id_prefix(), "A");
        assert_eq!(UserRole::Student.id_prefix(), "S");
        assert_eq!(UserRole::Faculty.id_prefix(), "F");
    }

    #[test]
    fn test_create_user_dto_minimal() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"role":"student"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.user_id, None);
        assert_eq!(dto.password, None);
    }

    #[test]
    fn test_create_user_dto_short_password() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"role":"student","password":"short"}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_user_never_serializes_password() {
        let user = User {
            id: Uuid::new_v4(),
            user_id: "S-00001".to_string(),
            role: UserRole::Student,
            needs_password_change: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let serialized = serde_json::to_string(&user).unwrap();
        assert!(!serialized.contains("password\""));
        assert!(serialized.contains(r#""userId":"S-00001""#));
        assert!(serialized.contains(r#""needsPasswordChange":true"#));
    }

    #[test]
    fn test_filter_params_from_query_strings() {
        let json = r#"{"searchTerm":"S-","role":"student","needsPasswordChange":"true","page":"2"}"#;
        let filters: UserFilterParams = serde_json::from_str(json).unwrap();
        assert_eq!(filters.search_term.as_deref(), Some("S-"));
        assert_eq!(filters.role, Some(UserRole::Student));
        assert_eq!(filters.needs_password_change, Some(true));
        assert_eq!(filters.pagination.page, Some(2));
    }
}
