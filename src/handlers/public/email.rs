use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::mailer::OutgoingEmail;
use crate::state::AppState;

// Sandbox sender/recipient pair published by the mail provider for
// connectivity checks. Nothing real receives these messages.
const TEST_FROM: &str = "Meridian Consulting <onboarding@resend.dev>";
const TEST_TO: &str = "delivered@resend.dev";

/// GET /test-simple-email - one-shot delivery check against the mail provider
///
/// Fires a single message at the provider's sandbox recipient and reports
/// whatever came back: `{"message": .., "data": <ack>}` on 200, or
/// `{"message": .., "error": <provider payload>}` on 500. One attempt, no
/// retry.
pub async fn test_simple_email(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let email = OutgoingEmail {
        from: TEST_FROM.to_string(),
        to: TEST_TO.to_string(),
        subject: "Meridian email check".to_string(),
        html: "<p>Test email from the Meridian API server.</p>".to_string(),
    };

    match state.mailer.send(&email).await {
        Ok(ack) => (
            StatusCode::OK,
            Json(json!({
                "message": "Test email sent successfully",
                "data": ack
            })),
        ),
        Err(e) => {
            tracing::error!("Test email failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Failed to send test email",
                    "error": e.to_payload()
                })),
            )
        }
    }
}
