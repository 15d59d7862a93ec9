use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::PaginationOptions;

/// An academic faculty (e.g. "Faculty of Science & Engineering").
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicFaculty {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateAcademicFacultyDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateAcademicFacultyDto {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
}

/// Query parameters accepted by the academic faculty list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicFacultyFilterParams {
    pub search_term: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_rejects_empty_title() {
        let dto = CreateAcademicFacultyDto {
            title: "".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_allows_absent_title() {
        let dto = UpdateAcademicFacultyDto { title: None };
        assert!(dto.validate().is_ok());
    }
}
