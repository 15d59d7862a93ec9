//! Request-body extraction and validation.
//!
//! [`ValidatedBody`] deserializes a JSON or urlencoded request body and
//! runs its `validator` rules before the handler body executes, so
//! services only ever see well-formed input. Failures surface as
//! [`AppError::Validation`] with one `{path, message}` entry per offending
//! field, dotted for nested fields (`name.first_name`).

use axum::{
    Form, Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use varsity_core::{AppError, ErrorMessage};

fn collect_into(prefix: &str, errors: &ValidationErrors, out: &mut Vec<ErrorMessage>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(ErrorMessage::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_into(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_into(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn format_errors(errors: &ValidationErrors) -> Vec<ErrorMessage> {
    let mut messages = Vec::new();
    collect_into("", errors, &mut messages);
    messages
}

fn map_json_rejection(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::validation(vec![ErrorMessage::new(
            field,
            format!("{field} is required"),
        )]);
    }

    if error_msg.contains("invalid type") {
        return AppError::validation(vec![ErrorMessage::new(
            "",
            "Invalid field type in request",
        )]);
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::validation(vec![ErrorMessage::new(
            "",
            "Missing 'Content-Type: application/json' header",
        )]);
    }

    AppError::validation(vec![ErrorMessage::new("", "Invalid request body")])
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedBody<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        let value = if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::validation(vec![ErrorMessage::new("", rejection.body_text())])
                })?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(map_json_rejection)?;
            value
        };

        value
            .validate()
            .map_err(|errors| AppError::validation(format_errors(&errors)))?;

        Ok(ValidatedBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(length(min = 1))]
        first_name: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(nested)]
        name: Inner,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_format_errors_flat_field() {
        let outer = Outer {
            name: Inner {
                first_name: "Ann".to_string(),
            },
            email: "nope".to_string(),
        };
        let errors = outer.validate().unwrap_err();
        let messages = format_errors(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "email");
    }

    #[test]
    fn test_format_errors_nested_path_is_dotted() {
        let outer = Outer {
            name: Inner {
                first_name: "".to_string(),
            },
            email: "ann@example.edu".to_string(),
        };
        let errors = outer.validate().unwrap_err();
        let messages = format_errors(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "name.first_name");
    }
}
