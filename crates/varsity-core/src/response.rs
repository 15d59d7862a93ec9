use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::pagination::PaginationMeta;

/// The uniform success envelope.
///
/// Every handler responds with `{success, message, meta?, data}`; `meta`
/// is present only on paginated list responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            meta: None,
            data,
        }
    }

    pub fn paginated(message: impl Into<String>, meta: PaginationMeta, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            meta: Some(meta),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let response = ApiResponse::ok("Student created successfully", 42);
        let serialized = serde_json::to_string(&response).unwrap();

        assert!(serialized.contains(r#""success":true"#));
        assert!(serialized.contains(r#""message":"Student created successfully""#));
        assert!(serialized.contains(r#""data":42"#));
        assert!(!serialized.contains("meta"));
    }

    #[test]
    fn test_paginated_envelope_includes_meta() {
        let meta = PaginationMeta {
            page: 1,
            limit: 10,
            total: 3,
        };
        let response = ApiResponse::paginated("Students retrieved successfully", meta, vec![1, 2, 3]);
        let serialized = serde_json::to_string(&response).unwrap();

        assert!(serialized.contains(r#""meta":{"page":1,"limit":10,"total":3}"#));
        assert!(serialized.contains(r#""data":[1,2,3]"#));
    }
}
