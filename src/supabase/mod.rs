pub mod auth;
pub mod error;
pub mod models;
pub mod rest;

pub use error::SupabaseError;
pub use models::{AuthUser, Profile};

use reqwest::Client;
use serde_json::Value;
use url::Url;

/// HTTP client for the hosted Postgres/auth provider.
///
/// One client per credential tier: a client built with the anon key runs its
/// queries under row level security, while a client built with the service
/// role key bypasses it and must never leave the server. Handlers receive
/// both through application state and pick per call site.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, SupabaseError> {
        let base = Url::parse(base_url)
            .map_err(|e| SupabaseError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            http: Client::new(),
            base,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }

    /// Turn a non-success response into an error, pulling the provider's own
    /// message out of the body when it has one.
    async fn api_error(resp: reqwest::Response) -> SupabaseError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        // PostgREST errors carry "message", the auth endpoints carry "msg"
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("msg"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        SupabaseError::Api { status, message }
    }
}
