pub mod resend;

pub use resend::ResendMailer;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Mutex;
use thiserror::Error;

/// One outbound transactional message, shaped the way the mail provider's
/// send endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Errors from mail delivery
#[derive(Debug, Error)]
pub enum MailerError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Mail provider returned {status}")]
    Provider { status: u16, body: Value },
}

impl MailerError {
    /// Error value to embed in API responses. Provider rejections pass the
    /// provider's own error payload through; transport failures become a
    /// plain message string.
    pub fn to_payload(&self) -> Value {
        match self {
            MailerError::Provider { body, .. } if !body.is_null() => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Delivery seam for transactional email.
///
/// The live implementation talks to Resend over HTTP; tests swap in
/// [`MockMailer`] to capture messages without network traffic.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message, returning the provider's acknowledgement payload.
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailerError>;
}

/// Mailer that records messages instead of delivering them.
#[derive(Debug, Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far, oldest first.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailerError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(json!({ "id": format!("mock-{}", sent.len()) }))
    }
}
