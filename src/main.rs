use anyhow::Context;
use tracing_subscriber::EnvFilter;

use meridian_api::config::AppConfig;
use meridian_api::router::app;
use meridian_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up provider credentials
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter)),
        )
        .init();

    tracing::info!("Starting Meridian API in {:?} mode", config.environment);

    let missing = config.missing_provider_vars();
    if !missing.is_empty() {
        tracing::warn!(
            "Missing provider credentials: {}; endpoints that need them will fail",
            missing.join(", ")
        );
    }
    if config.has_legacy_mail_vars() {
        tracing::warn!(
            "Legacy MAIL_* variables are set but unused; outbound mail goes through RESEND_API_KEY"
        );
    }

    let state = AppState::from_config(&config).context("failed to build provider clients")?;
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Meridian API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
