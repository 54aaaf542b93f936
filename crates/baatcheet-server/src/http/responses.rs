//! HTTP error boundary.
//!
//! Every failure leaving a handler goes through [`ApiError`], which picks
//! the status code and renders a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::generator::GeneratorError;

/// Error details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorObject {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: String,

    pub code: String,

    /// Optional parameter name for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// Error response wrapper.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorObject,
}

/// API errors with their HTTP status codes.
#[derive(Debug)]
pub enum ApiError {
    // Client errors (4xx)
    /// Body is not JSON or does not have the expected fields.
    MalformedInput { message: String },
    /// A field is present but unusable.
    InvalidField {
        field: &'static str,
        message: String,
    },

    // Server errors (5xx)
    /// The generator could not be reached.
    GeneratorUnavailable { message: String },
    /// The generator answered, but not with a usable reply.
    GeneratorFailed { message: String },
    /// Internal server error.
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message, param) = match self {
            ApiError::MalformedInput { message } => (
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                "invalid_json",
                message,
                None,
            ),
            ApiError::InvalidField { field, message } => (
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                "invalid_field",
                format!("Invalid field '{}': {}", field, message),
                Some(field.to_string()),
            ),
            ApiError::GeneratorUnavailable { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "server_error",
                "generator_unavailable",
                message,
                None,
            ),
            ApiError::GeneratorFailed { message } => (
                StatusCode::BAD_GATEWAY,
                "server_error",
                "generator_failed",
                message,
                None,
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
                "internal_error",
                message,
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorObject {
                message,
                error_type: error_type.to_string(),
                code: code.to_string(),
                param,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<GeneratorError> for ApiError {
    fn from(err: GeneratorError) -> Self {
        let message = err.to_string();
        match err {
            GeneratorError::Unavailable(_) => ApiError::GeneratorUnavailable { message },
            GeneratorError::Upstream { .. }
            | GeneratorError::InvalidPayload(_)
            | GeneratorError::EmptyReply => ApiError::GeneratorFailed { message },
            GeneratorError::Config(_) => ApiError::Internal { message },
        }
    }
}
