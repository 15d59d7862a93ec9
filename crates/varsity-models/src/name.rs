use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Structured person name embedded in students and faculties.
///
/// Only the first name is mandatory; the middle and last parts may be
/// filled in later via a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

/// Partial update for a [`HumanName`].
///
/// Each present field overwrites the corresponding part; absent fields are
/// left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NamePatch {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

impl HumanName {
    /// Applies a patch field-by-field, leaving unspecified parts unchanged.
    pub fn apply(&mut self, patch: NamePatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(middle_name) = patch.middle_name {
            self.middle_name = Some(middle_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> HumanName {
        HumanName {
            first_name: "Ann".to_string(),
            middle_name: None,
            last_name: None,
        }
    }

    #[test]
    fn test_apply_sets_only_present_fields() {
        let mut name = ann();
        name.apply(NamePatch {
            last_name: Some("Lee".to_string()),
            ..Default::default()
        });

        assert_eq!(name.first_name, "Ann");
        assert_eq!(name.middle_name, None);
        assert_eq!(name.last_name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut name = HumanName {
            first_name: "Ann".to_string(),
            middle_name: Some("B".to_string()),
            last_name: Some("Lee".to_string()),
        };
        name.apply(NamePatch::default());

        assert_eq!(name.first_name, "Ann");
        assert_eq!(name.middle_name.as_deref(), Some("B"));
        assert_eq!(name.last_name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_apply_overwrites_existing_fields() {
        let mut name = HumanName {
            first_name: "Ann".to_string(),
            middle_name: None,
            last_name: Some("Lee".to_string()),
        };
        name.apply(NamePatch {
            first_name: Some("Anna".to_string()),
            last_name: Some("Li".to_string()),
            ..Default::default()
        });

        assert_eq!(name.first_name, "Anna");
        assert_eq!(name.last_name.as_deref(), Some("Li"));
    }

    #[test]
    fn test_name_wire_casing() {
        let name = HumanName {
            first_name: "Ann".to_string(),
            middle_name: None,
            last_name: Some("Lee".to_string()),
        };
        let serialized = serde_json::to_string(&name).unwrap();
        assert!(serialized.contains(r#""firstName":"Ann""#));
        assert!(serialized.contains(r#""lastName":"Lee""#));
    }

    #[test]
    fn test_empty_first_name_fails_validation() {
        let name = HumanName {
            first_name: "".to_string(),
            middle_name: None,
            last_name: None,
        };
        assert!(name.validate().is_err());
    }
}
