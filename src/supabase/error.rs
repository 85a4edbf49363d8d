use thiserror::Error;

/// Errors from SupabaseClient
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Invalid provider base URL: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected provider response: {0}")]
    Parse(String),
}
