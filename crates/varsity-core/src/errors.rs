use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// A single entry in the `errorMessages` list of the failure envelope.
///
/// `path` names the offending field (dotted for nested fields, e.g.
/// `name.first_name`), or is empty when the error is not tied to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub path: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Application error kinds.
///
/// Services return `Result<_, AppError>`; handlers never catch. The
/// [`IntoResponse`] impl renders the uniform failure envelope, so every
/// raised error funnels through one place.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input, caught before the service runs.
    Validation(Vec<ErrorMessage>),
    /// A uniqueness constraint was violated.
    Conflict(String),
    /// The identifier did not resolve to a record.
    NotFound(String),
    /// Credential mismatch.
    Unauthorized(String),
    /// Unexpected failure (database unreachable, token signing, ...).
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(errors: Vec<ErrorMessage>) -> Self {
        Self::Validation(errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(_) => "Validation Error".to_string(),
            Self::Conflict(message) | Self::NotFound(message) | Self::Unauthorized(message) => {
                message.clone()
            }
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }

    fn error_messages(&self) -> Vec<ErrorMessage> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::Internal(err) => vec![ErrorMessage::new("", err.to_string())],
            other => vec![ErrorMessage::new("", other.message())],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let body = Json(json!({
            "success": false,
            "message": self.message(),
            "errorMessages": self.error_messages(),
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::conflict("Duplicate value violates a uniqueness constraint");
            }
        }
        AppError::internal(anyhow::Error::from(err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err)
    }
}

/// Failure envelope shape, documented for OpenAPI.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_messages: Vec<ErrorMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation(vec![]).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::conflict("dup").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::not_found("gone").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::unauthorized("nope").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_for_validation_is_fixed() {
        let err = AppError::validation(vec![ErrorMessage::new("email", "email is invalid")]);
        assert_eq!(err.message(), "Validation Error");
    }

    #[test]
    fn test_error_messages_for_not_found() {
        let err = AppError::not_found("Student not found");
        let messages = err.error_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "");
        assert_eq!(messages[0].message, "Student not found");
    }

    #[test]
    fn test_error_messages_for_validation_keeps_paths() {
        let err = AppError::validation(vec![
            ErrorMessage::new("name.firstName", "firstName is required"),
            ErrorMessage::new("email", "email is invalid"),
        ]);
        let messages = err.error_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].path, "name.firstName");
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_row_not_found_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_serializes_paths() {
        let message = ErrorMessage::new("password", "password is required");
        let serialized = serde_json::to_string(&message).unwrap();
        assert!(serialized.contains(r#""path":"password""#));
        assert!(serialized.contains(r#""message":"password is required""#));
    }
}
