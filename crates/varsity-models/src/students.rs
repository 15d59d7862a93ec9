//! Student domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::PaginationOptions;

use crate::academic_departments::AcademicDepartment;
use crate::academic_faculties::AcademicFaculty;
use crate::name::{HumanName, NamePatch};

/// A student record.
///
/// `studentId` is the business identifier used in routes; the academic
/// references are expanded on read and `null` when unset.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub student_id: String,
    pub name: HumanName,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub academic_faculty: Option<AcademicFaculty>,
    pub academic_department: Option<AcademicDepartment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 32))]
    pub student_id: String,
    #[validate(nested)]
    pub name: HumanName,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub contact_no: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
    pub academic_department_id: Option<Uuid>,
}

/// DTO for updating a student. Only provided fields are changed; the name
/// patch merges into the stored name sub-field by sub-field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(nested)]
    pub name: Option<NamePatch>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub contact_no: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
    pub academic_department_id: Option<Uuid>,
}

/// Query parameters accepted by the student list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilterParams {
    pub search_term: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateStudentDto {
        CreateStudentDto {
            student_id: "S-00001".to_string(),
            name: HumanName {
                first_name: "Ann".to_string(),
                middle_name: None,
                last_name: Some("Lee".to_string()),
            },
            email: Some("ann.lee@example.edu".to_string()),
            contact_no: None,
            academic_faculty_id: None,
            academic_department_id: None,
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_create_dto_invalid_email() {
        let mut dto = valid_dto();
        dto.email = Some("not-an-email".to_string());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_allows_missing_email() {
        let dto: CreateStudentDto =
            serde_json::from_str(r#"{"studentId":"S-00003","name":{"firstName":"Ann"}}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.email, None);
    }

    #[test]
    fn test_create_dto_rejects_empty_nested_first_name() {
        let mut dto = valid_dto();
        dto.name.first_name = "".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_allows_missing_last_name() {
        let dto: CreateStudentDto = serde_json::from_str(
            r#"{"studentId":"S-00002","name":{"firstName":"Ann"}}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.name.last_name, None);
    }

    #[test]
    fn test_update_dto_empty_is_valid() {
        assert!(UpdateStudentDto::default().validate().is_ok());
    }

    #[test]
    fn test_update_dto_partial_name() {
        let dto: UpdateStudentDto =
            serde_json::from_str(r#"{"name":{"lastName":"Lee"}}"#).unwrap();
        assert!(dto.validate().is_ok());
        let patch = dto.name.unwrap();
        assert_eq!(patch.first_name, None);
        assert_eq!(patch.last_name.as_deref(), Some("Lee"));
    }
}
