//! HTTP helpers for the gateway service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::Error;

/// Error envelope returned by the gateway.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Create an error response with the given status code and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ErrorBody::new("Not found: /nope")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "error": "Not found: /nope"})
        );
    }

    #[test]
    fn test_error_into_response_status() {
        let response = Error::NotFound("/api/missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = Error::Validation("empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::MethodNotAllowed("PATCH /api/api/x".into()).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
