mod analysis;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::Analyzer;
use crate::config::{AugmentationConfig, Config};
use crate::llm_client::{DisabledGenerator, GeminiClient, GeminiSettings, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Match API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the augmentation backend once; no runtime probing afterwards
    let generator = build_generator(&config.augmentation)?;
    info!("Recommendation augmentation backend: {}", generator.backend());

    let analyzer = Analyzer::new(generator, config.augmentation.timeout);

    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects the text generator from configuration.
fn build_generator(config: &AugmentationConfig) -> Result<Arc<dyn TextGenerator>> {
    if !config.enabled {
        return Ok(Arc::new(DisabledGenerator));
    }

    let Some(api_key) = config.api_key.clone() else {
        warn!("USE_GEMINI is set but GOOGLE_API_KEY is missing; augmentation disabled");
        return Ok(Arc::new(DisabledGenerator));
    };

    let client = GeminiClient::new(GeminiSettings {
        api_key,
        model: config.model.clone(),
        api_base: config.api_base.clone(),
        timeout: config.timeout,
    })?;
    info!("Gemini client initialized (model: {})", client.model());

    Ok(Arc::new(client))
}
