//! Error types for the REST API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::TransformError;

/// API error types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No transform registered under the requested name
    TransformNotFound(String),
    /// Invalid parameter in request
    InvalidParameter(String),
}

impl ApiError {
    /// HTTP status and error type tag for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::TransformNotFound(_) => (StatusCode::NOT_FOUND, "TransformNotFound"),
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, "InvalidParameter"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::TransformNotFound(name) => write!(f, "Transform not found: {}", name),
            ApiError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();
        let message = match &self {
            ApiError::TransformNotFound(name) => format!("Transform '{}' is not registered", name),
            ApiError::InvalidParameter(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::UnknownTransform(name) => ApiError::TransformNotFound(name),
            other => ApiError::InvalidParameter(other.to_string()),
        }
    }
}
