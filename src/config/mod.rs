use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_filter: String,
}

/// Credentials for the hosted Postgres/auth provider. The anon key is safe to
/// hand to user-scoped requests; the service role key bypasses row level
/// security and must only ever be used server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub service_role_key: String,
}

/// Outbound mail settings. Delivery goes through Resend; the gmail_* fields
/// mirror the legacy OAuth2 SMTP deployment and are parsed so operators get a
/// startup warning when they are still set, but nothing reads them otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub resend_api_key: String,
    pub gmail_user: Option<String>,
    pub gmail_client_id: Option<String>,
    pub gmail_client_secret: Option<String>,
    pub gmail_refresh_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("LOG_FILTER") {
            self.server.log_filter = v;
        }

        // Database/auth provider credentials
        if let Ok(v) = env::var("SUPABASE_URL") {
            self.supabase.url = v;
        }
        if let Ok(v) = env::var("SUPABASE_ANON_KEY") {
            self.supabase.anon_key = v;
        }
        if let Ok(v) = env::var("SUPABASE_SERVICE_ROLE_KEY") {
            self.supabase.service_role_key = v;
        }

        // Mail provider credentials
        if let Ok(v) = env::var("RESEND_API_KEY") {
            self.mail.resend_api_key = v;
        }
        self.mail.gmail_user = env::var("MAIL_USER").ok();
        self.mail.gmail_client_id = env::var("MAIL_CLIENT_ID").ok();
        self.mail.gmail_client_secret = env::var("MAIL_CLIENT_SECRET").ok();
        self.mail.gmail_refresh_token = env::var("MAIL_REFRESH_TOKEN").ok();

        self
    }

    /// Names of required provider variables that are still unset. The server
    /// boots without them so pages and demo data keep working, but every
    /// provider-backed endpoint will fail until they are supplied.
    pub fn missing_provider_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.supabase.url.is_empty() {
            missing.push("SUPABASE_URL");
        }
        if self.supabase.anon_key.is_empty() {
            missing.push("SUPABASE_ANON_KEY");
        }
        if self.supabase.service_role_key.is_empty() {
            missing.push("SUPABASE_SERVICE_ROLE_KEY");
        }
        if self.mail.resend_api_key.is_empty() {
            missing.push("RESEND_API_KEY");
        }
        missing
    }

    /// True when any of the legacy OAuth2 SMTP variables are still set.
    pub fn has_legacy_mail_vars(&self) -> bool {
        self.mail.gmail_user.is_some()
            || self.mail.gmail_client_id.is_some()
            || self.mail.gmail_client_secret.is_some()
            || self.mail.gmail_refresh_token.is_some()
    }

    pub(crate) fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3001,
                log_filter: "meridian_api=debug,tower_http=debug".to_string(),
            },
            supabase: SupabaseConfig {
                url: String::new(),
                anon_key: String::new(),
                service_role_key: String::new(),
            },
            mail: MailConfig {
                resend_api_key: String::new(),
                gmail_user: None,
                gmail_client_id: None,
                gmail_client_secret: None,
                gmail_refresh_token: None,
            },
        }
    }

    pub(crate) fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3001,
                log_filter: "meridian_api=info".to_string(),
            },
            ..Self::development()
        }
    }

    pub(crate) fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 8080,
                log_filter: "meridian_api=info".to_string(),
            },
            ..Self::development()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 3001);
        assert!(config.supabase.url.is_empty());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_filter, "meridian_api=info");
    }

    #[test]
    fn test_missing_provider_vars_lists_unset_credentials() {
        let config = AppConfig::development();
        let missing = config.missing_provider_vars();
        assert!(missing.contains(&"SUPABASE_URL"));
        assert!(missing.contains(&"RESEND_API_KEY"));
        assert_eq!(missing.len(), 4);
    }

    #[test]
    fn test_missing_provider_vars_empty_when_configured() {
        let mut config = AppConfig::development();
        config.supabase.url = "https://example.supabase.co".to_string();
        config.supabase.anon_key = "anon".to_string();
        config.supabase.service_role_key = "service".to_string();
        config.mail.resend_api_key = "re_123".to_string();
        assert!(config.missing_provider_vars().is_empty());
    }

    #[test]
    fn test_legacy_mail_vars_detected() {
        let mut config = AppConfig::development();
        assert!(!config.has_legacy_mail_vars());
        config.mail.gmail_user = Some("ops@example.com".to_string());
        assert!(config.has_legacy_mail_vars());
    }
}
