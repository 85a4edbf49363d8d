use axum::{
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::response::{ApiResult, Payload};
use crate::middleware::session::bearer_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub user_id: Option<String>,
    pub is_admin: Option<String>,
}

/// GET /dashboard/stats - dashboard aggregates for one account
///
/// Requires a bearer Authorization header and a `userId` query value; both
/// checks run before anything leaves the process, so a request missing
/// either never reaches the database. The values themselves are not
/// verified here: the aggregate function resolves what the given account is
/// allowed to see, and `isAdmin=true` merely asks for the firm-wide rollup.
pub async fn dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
    headers: HeaderMap,
) -> ApiResult<Value> {
    if bearer_token(&headers).is_none() {
        return Err(ApiError::unauthorized("Missing authorization header"));
    }

    let user_id = match query.user_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::unauthorized("Missing userId parameter")),
    };
    let is_admin = query.is_admin.as_deref() == Some("true");

    let stats = state
        .db_admin
        .rpc("dashboard_stats", &json!({ "user_id": user_id, "is_admin": is_admin }))
        .await
        .map_err(|e| ApiError::internal_with("Failed to fetch dashboard stats", e))?;

    Ok(Payload::new("stats", stats))
}
