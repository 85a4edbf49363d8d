use std::sync::Arc;

use crate::config::AppConfig;
use crate::mailer::{Mailer, ResendMailer};
use crate::supabase::{SupabaseClient, SupabaseError};

/// Base URL of the local development stack, used when SUPABASE_URL is unset
/// so the server can still boot for page and demo work.
const DEFAULT_LOCAL_URL: &str = "http://localhost:54321";

/// Shared application state handed to every handler.
///
/// Both database clients point at the same provider and differ only in the
/// credential they carry: `db_user` holds the anon key and runs under row
/// level security, `db_admin` holds the service role key and bypasses it.
/// Nothing here is global; tests build their own state against stand-in
/// servers.
#[derive(Clone)]
pub struct AppState {
    pub db_user: SupabaseClient,
    pub db_admin: SupabaseClient,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Build the live provider clients from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, SupabaseError> {
        let base_url = if config.supabase.url.is_empty() {
            DEFAULT_LOCAL_URL
        } else {
            config.supabase.url.as_str()
        };

        let db_user = SupabaseClient::new(base_url, config.supabase.anon_key.clone())?;
        let db_admin = SupabaseClient::new(base_url, config.supabase.service_role_key.clone())?;
        let mailer = Arc::new(ResendMailer::new(config.mail.resend_api_key.clone()));

        Ok(Self {
            db_user,
            db_admin,
            mailer,
        })
    }
}
