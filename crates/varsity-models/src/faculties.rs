//! Teaching-staff (faculty member) domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::PaginationOptions;

use crate::academic_departments::AcademicDepartment;
use crate::academic_faculties::AcademicFaculty;
use crate::name::{HumanName, NamePatch};

/// A faculty member (teaching staff).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: Uuid,
    pub faculty_id: String,
    pub name: HumanName,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub designation: Option<String>,
    pub academic_faculty: Option<AcademicFaculty>,
    pub academic_department: Option<AcademicDepartment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacultyDto {
    #[validate(length(min = 1, max = 32))]
    pub faculty_id: String,
    #[validate(nested)]
    pub name: HumanName,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub contact_no: Option<String>,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
    pub academic_department_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacultyDto {
    #[validate(nested)]
    pub name: Option<NamePatch>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub contact_no: Option<String>,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    pub academic_faculty_id: Option<Uuid>,
    pub academic_department_id: Option<Uuid>,
}

/// Query parameters accepted by the faculty list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyFilterParams {
    pub search_term: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub designation: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_from_minimal_payload() {
        let dto: CreateFacultyDto =
            serde_json::from_str(r#"{"facultyId":"F1","name":{"firstName":"Ann"}}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.faculty_id, "F1");
        assert_eq!(dto.name.first_name, "Ann");
        assert_eq!(dto.email, None);
        assert_eq!(dto.designation, None);
    }

    #[test]
    fn test_create_dto_rejects_bad_email() {
        let dto: CreateFacultyDto =
            serde_json::from_str(r#"{"facultyId":"F1","name":{"firstName":"Ann"},"email":"nope"}"#)
                .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_designation_only() {
        let dto: UpdateFacultyDto =
            serde_json::from_str(r#"{"designation":"Senior Lecturer"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.name.is_none());
    }
}
