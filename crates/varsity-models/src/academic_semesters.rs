//! Academic semester models and the title/code/month domain constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use varsity_core::pagination::{PaginationOptions, deserialize_optional_i32};

/// Valid semester titles, in calendar order.
pub const SEMESTER_TITLES: [&str; 3] = ["Autumn", "Summer", "Fall"];

/// Valid semester codes, matching [`SEMESTER_TITLES`] position for position.
pub const SEMESTER_CODES: [&str; 3] = ["01", "02", "03"];

/// Valid month names for semester start/end bounds.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the code a given semester title must carry, or `None` for an
/// unknown title.
pub fn code_for_title(title: &str) -> Option<&'static str> {
    SEMESTER_TITLES
        .iter()
        .position(|t| *t == title)
        .map(|index| SEMESTER_CODES[index])
}

/// An academic semester (e.g. Autumn 2025).
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSemester {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub year: i32,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicSemesterDto {
    #[validate(length(min = 1, max = 20))]
    pub title: String,
    #[validate(length(min = 2, max = 2))]
    pub code: String,
    #[validate(range(min = 1900, max = 3000))]
    pub year: i32,
    #[validate(length(min = 1, max = 20))]
    pub start_month: String,
    #[validate(length(min = 1, max = 20))]
    pub end_month: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicSemesterDto {
    #[validate(length(min = 1, max = 20))]
    pub title: Option<String>,
    #[validate(length(min = 2, max = 2))]
    pub code: Option<String>,
    #[validate(range(min = 1900, max = 3000))]
    pub year: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub start_month: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub end_month: Option<String>,
}

/// Query parameters accepted by the semester list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSemesterFilterParams {
    pub search_term: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub year: Option<i32>,
    #[serde(flatten)]
    pub pagination: PaginationOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_title_known_titles() {
        assert_eq!(code_for_title("Autumn"), Some("01"));
        assert_eq!(code_for_title("Summer"), Some("02"));
        assert_eq!(code_for_title("Fall"), Some("03"));
    }

    #[test]
    fn test_code_for_title_unknown_title() {
        assert_eq!(code_for_title("Winter"), None);
        assert_eq!(code_for_title("autumn"), None);
    }

    #[test]
    fn test_create_dto_validation() {
        let dto = CreateAcademicSemesterDto {
            title: "Autumn".to_string(),
            code: "01".to_string(),
            year: 2025,
            start_month: "January".to_string(),
            end_month: "April".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_long_code() {
        let dto = CreateAcademicSemesterDto {
            title: "Autumn".to_string(),
            code: "001".to_string(),
            year: 2025,
            start_month: "January".to_string(),
            end_month: "April".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_implausible_year() {
        let dto = CreateAcademicSemesterDto {
            title: "Autumn".to_string(),
            code: "01".to_string(),
            year: 325,
            start_month: "January".to_string(),
            end_month: "April".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_filter_params_year_from_string() {
        let filters: AcademicSemesterFilterParams =
            serde_json::from_str(r#"{"year":"2025","searchTerm":"aut"}"#).unwrap();
        assert_eq!(filters.year, Some(2025));
        assert_eq!(filters.search_term.as_deref(), Some("aut"));
    }
}
