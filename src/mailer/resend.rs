use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{Mailer, MailerError, OutgoingEmail};

const DEFAULT_API_URL: &str = "https://api.resend.com";

/// `Mailer` backed by the Resend HTTP API.
///
/// A send is a single POST to `/emails`; there is no retry, delivery is
/// fire-and-forget from the application's point of view.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    http: Client,
    api_key: String,
    api_url: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint, mainly for tests.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailerError> {
        let resp = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status >= 400 {
            let body = resp.json().await.unwrap_or(Value::Null);
            return Err(MailerError::Provider { status, body });
        }

        Ok(resp.json().await?)
    }
}
