use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Wrapper for API responses that nests the value under a single named key.
///
/// Success bodies on this API always carry exactly one top-level key naming
/// the resource, e.g. `{"profile": {...}}` or `{"stats": {...}}`. Failures go
/// through `ApiError` and serialize as `{"error": "..."}` instead, so clients
/// can branch on which key is present.
#[derive(Debug)]
pub struct Payload<T: Serialize> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> Payload<T> {
    /// Create a successful payload, rendered with 200 status
    pub fn new(key: &'static str, data: T) -> Self {
        Self { key, data }
    }
}

/// Build the single-key envelope for a payload value.
fn envelope<T: Serialize>(key: &'static str, data: &T) -> Result<Value, serde_json::Error> {
    let value = serde_json::to_value(data)?;
    let mut body = Map::with_capacity(1);
    body.insert(key.to_string(), value);
    Ok(Value::Object(body))
}

impl<T: Serialize> IntoResponse for Payload<T> {
    fn into_response(self) -> Response {
        let body = match envelope(self.key, &self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to serialize response data"
                    })),
                )
                    .into_response();
            }
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}

// Convenience type alias for handler signatures
pub type ApiResult<T> = Result<Payload<T>, crate::error::ApiError>;
