use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::middleware::response::{ApiResult, Payload};
use crate::middleware::session::SessionToken;
use crate::state::AppState;
use crate::supabase::{AuthUser, Profile};

/// GET /auth/profile - profile row for the signed-in account
///
/// The session token is exchanged for an account through the auth provider
/// using the user-scoped client. The profile row itself is read with the
/// service role client so row level security cannot hide a row from its own
/// owner. `{"profile": {...}}` on success; 401 without a valid session, 404
/// when the account has no profile row yet.
pub async fn profile_get(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> ApiResult<Profile> {
    let user = authenticated_user(&state, &token).await?;

    let profile = fetch_profile(&state, &user)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Payload::new("profile", profile))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub role: Option<String>,
}

/// POST /auth/profile - create or update the signed-in account's profile
///
/// Upserts by account id, so the first call after signup creates the row.
/// Only the fields present in the request body are written; the account id
/// and email always come from the verified session, never from the body.
pub async fn profile_post(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Profile> {
    let user = authenticated_user(&state, &token).await?;

    let mut row = Map::new();
    row.insert("id".to_string(), json!(user.id));
    if let Some(email) = &user.email {
        row.insert("email".to_string(), json!(email));
    }
    if let Some(display_name) = update.display_name {
        row.insert("display_name".to_string(), json!(display_name));
    }
    if let Some(role) = update.role {
        row.insert("role".to_string(), json!(role));
    }

    let stored = state
        .db_admin
        .upsert("profiles", &Value::Object(row))
        .await
        .map_err(|e| ApiError::internal_with("Failed to update user profile", e))?;

    let profile: Profile = serde_json::from_value(stored)
        .map_err(|e| ApiError::internal_with("Failed to update user profile", e))?;

    Ok(Payload::new("profile", profile))
}

/// Resolve the session token to an account, or 401.
async fn authenticated_user(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    state
        .db_user
        .user_for_token(token)
        .await
        .map_err(|e| ApiError::internal_with("Failed to fetch user profile", e))?
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
}

/// Profile row for an account, decoded into the typed model. A present row
/// that fails to decode is a 500 with the decode problem in the details.
async fn fetch_profile(state: &AppState, user: &AuthUser) -> Result<Option<Profile>, ApiError> {
    let filter = format!("eq.{}", user.id);
    let row = state
        .db_admin
        .maybe_single("profiles", &[("id", filter.as_str())])
        .await
        .map_err(|e| ApiError::internal_with("Failed to fetch user profile", e))?;

    match row {
        Some(row) => {
            let profile = serde_json::from_value(row)
                .map_err(|e| ApiError::internal_with("Failed to fetch user profile", e))?;
            Ok(Some(profile))
        }
        None => Ok(None),
    }
}
