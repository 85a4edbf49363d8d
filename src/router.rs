use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::session::session_scope;
use crate::state::AppState;

/// Build the full application router around the given state.
///
/// Tests call this directly against stand-in providers; the binary calls it
/// once with the live configuration.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Server-rendered pages
        .merge(page_routes())
        // Public API
        .merge(demo_routes())
        .merge(debug_routes())
        // Session-gated API
        .merge(account_routes())
        // Global middleware
        .layer(middleware::from_fn(session_scope))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn page_routes() -> Router<AppState> {
    use crate::pages;

    Router::new()
        .route("/", get(pages::home))
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact))
        .route("/client-portal", get(pages::client_portal))
}

fn demo_routes() -> Router<AppState> {
    use crate::handlers::public::demo;

    Router::new().route("/demo", get(demo::demo_get))
}

fn debug_routes() -> Router<AppState> {
    use crate::handlers::public::{debug, email};

    Router::new()
        .route("/debug/check-profiles", get(debug::check_profiles))
        .route("/debug/list-users", get(debug::list_users))
        .route("/debug/profile-check", get(debug::profile_check))
        .route("/test-simple-email", get(email::test_simple_email))
}

fn account_routes() -> Router<AppState> {
    use crate::handlers::protected::{profile, stats};

    Router::new()
        .route(
            "/auth/profile",
            get(profile::profile_get).post(profile::profile_post),
        )
        .route("/dashboard/stats", get(stats::dashboard_stats))
}

/// GET /health - service and database reachability
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db_user.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database": e.to_string()
            })),
        ),
    }
}
