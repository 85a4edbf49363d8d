// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every failure serializes as `{"error": "..."}`, plus a `"details"` field
/// when the handler chose to surface the underlying provider message.
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Internal { .. } => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Internal { message, .. } => message,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Internal {
                message,
                details: Some(details),
            } => {
                json!({
                    "error": message,
                    "details": details
                })
            }
            _ => {
                json!({
                    "error": self.message()
                })
            }
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            details: None,
        }
    }

    /// Internal error that carries the underlying cause in the response body.
    pub fn internal_with(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message: message.into(),
            details: Some(source.to_string()),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("401 response: {}", msg);
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("404 response: {}", msg);
            }
            ApiError::Internal { message, details } => match details {
                Some(details) => tracing::error!("500 response: {}: {}", message, details),
                None => tracing::error!("500 response: {}", message),
            },
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
