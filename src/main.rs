use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stylist_api::api::{create_router, AppState};
use stylist_api::config::Config;
use stylist_api::services::providers::HuggingFaceProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stylist_api=info")),
        )
        .init();

    // Load configuration once; it is immutable for the process lifetime
    let config = Config::from_env()?;

    if !config.model_configured() {
        tracing::warn!("HF_API_KEY/HF_MODEL not set, serving static fallback recommendations only");
    }

    let provider = HuggingFaceProvider::new(
        config.hf_api_key.clone(),
        config.hf_model.clone(),
        config.hf_api_url.clone(),
    )?;

    let state = AppState::new(Arc::new(provider));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
