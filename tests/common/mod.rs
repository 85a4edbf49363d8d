use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use meridian_api::mailer::{Mailer, MockMailer};
use meridian_api::router::app;
use meridian_api::state::AppState;
use meridian_api::supabase::SupabaseClient;

pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Bind the full router to an ephemeral port and serve it for the rest
    /// of the test process. Every test spawns its own server against its own
    /// stand-in providers, so tests never share state.
    pub async fn spawn(state: AppState) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind test listener")?;
        let addr = listener.local_addr().context("missing local addr")?;

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("test server stopped");
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// State pointing both database clients at a stand-in provider server, with
/// mail captured in-process.
pub fn test_state(supabase_url: &str) -> AppState {
    test_state_with_mailer(supabase_url, Arc::new(MockMailer::new()))
}

pub fn test_state_with_mailer(supabase_url: &str, mailer: Arc<dyn Mailer>) -> AppState {
    AppState {
        db_user: SupabaseClient::new(supabase_url, "test-anon-key").expect("stand-in url"),
        db_admin: SupabaseClient::new(supabase_url, "test-service-key").expect("stand-in url"),
        mailer,
    }
}
