use axum::{extract::State, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::supabase::AuthUser;

// Seeded accounts the debug endpoints report on. These exist in every
// environment the seed script has run against.
const ADMIN_EMAIL: &str = "admin@example.com";
const TEAM_EMAIL: &str = "team@example.com";
const FOUNDER_EMAIL: &str = "steven@example.com";

/// GET /debug/check-profiles - seeded accounts vs. their profile rows
///
/// Response: `{"adminProfile": .., "teamProfile": .., "allProfiles": [..],
/// "adminUserId": .., "teamUserId": ..}` with nulls where an account or
/// profile is missing. Used to diagnose a seed run that created auth
/// accounts but not their profile rows.
pub async fn check_profiles(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state
        .db_admin
        .list_users()
        .await
        .map_err(|e| ApiError::internal_with("Failed to check profiles", e))?;

    let admin_id = find_by_email(&users, ADMIN_EMAIL).map(|u| u.id);
    let team_id = find_by_email(&users, TEAM_EMAIL).map(|u| u.id);

    let admin_profile = profile_by_id(&state, admin_id)
        .await
        .map_err(|e| ApiError::internal_with("Failed to check profiles", e))?;
    let team_profile = profile_by_id(&state, team_id)
        .await
        .map_err(|e| ApiError::internal_with("Failed to check profiles", e))?;

    let all_profiles = state
        .db_admin
        .rows("profiles", &[], None)
        .await
        .map_err(|e| ApiError::internal_with("Failed to check profiles", e))?;

    Ok(Json(json!({
        "adminProfile": admin_profile,
        "teamProfile": team_profile,
        "allProfiles": all_profiles,
        "adminUserId": admin_id,
        "teamUserId": team_id,
    })))
}

/// GET /debug/list-users - first few auth accounts plus the CRM tables
///
/// Auth accounts are capped at five entries; the companies and contacts
/// tables are small enough to dump whole.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state
        .db_admin
        .list_users()
        .await
        .map_err(|e| ApiError::internal_with("Failed to list users", e))?;
    let auth_users: Vec<&AuthUser> = users.iter().take(5).collect();

    let companies = state
        .db_admin
        .rows("client_companies", &[], None)
        .await
        .map_err(|e| ApiError::internal_with("Failed to list users", e))?;
    let contacts = state
        .db_admin
        .rows("client_contacts", &[], None)
        .await
        .map_err(|e| ApiError::internal_with("Failed to list users", e))?;

    Ok(Json(json!({
        "authUsers": auth_users,
        "companies": companies,
        "contacts": contacts,
    })))
}

/// GET /debug/profile-check - founder profile lookup by email
pub async fn profile_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let filter = format!("eq.{}", FOUNDER_EMAIL);
    let steven_profile = state
        .db_admin
        .maybe_single("profiles", &[("email", filter.as_str())])
        .await
        .map_err(|e| ApiError::internal_with("Profile check failed", e))?;

    let all_profiles = state
        .db_admin
        .rows("profiles", &[], None)
        .await
        .map_err(|e| ApiError::internal_with("Profile check failed", e))?;
    let has_profiles = !all_profiles.is_empty();

    Ok(Json(json!({
        "stevenProfile": steven_profile,
        "allProfiles": all_profiles,
        "hasProfiles": has_profiles,
    })))
}

fn find_by_email<'a>(users: &'a [AuthUser], email: &str) -> Option<&'a AuthUser> {
    users.iter().find(|u| u.email.as_deref() == Some(email))
}

async fn profile_by_id(
    state: &AppState,
    id: Option<Uuid>,
) -> Result<Option<Value>, crate::supabase::SupabaseError> {
    match id {
        Some(id) => {
            let filter = format!("eq.{}", id);
            state
                .db_admin
                .maybe_single("profiles", &[("id", filter.as_str())])
                .await
        }
        None => Ok(None),
    }
}
