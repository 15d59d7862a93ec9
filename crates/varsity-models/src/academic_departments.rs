use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::PaginationOptions;

use crate::academic_faculties::AcademicFaculty;

/// An academic department, owned by an academic faculty.
///
/// The owning faculty is resolved via join on read; `academicFaculty` is
/// `null` when the reference has been cleared.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDepartment {
    pub id: Uuid,
    pub title: String,
    pub academic_faculty: Option<AcademicFaculty>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicDepartmentDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub academic_faculty_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicDepartmentDto {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
}

/// Query parameters accepted by the department list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDepartmentFilterParams {
    pub search_term: Option<String>,
    pub title: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_requires_title() {
        let dto = CreateAcademicDepartmentDto {
            title: "".to_string(),
            academic_faculty_id: Uuid::new_v4(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_filter_params_uuid_from_query_string() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"academicFacultyId":"{id}","page":"3"}}"#);
        let filters: AcademicDepartmentFilterParams = serde_json::from_str(&json).unwrap();
        assert_eq!(filters.academic_faculty_id, Some(id));
        assert_eq!(filters.pagination.page, Some(3));
    }
}
