mod artifacts;
mod config;
mod errors;
mod generation;
mod layout;
mod llm_client;
mod mailer;
mod models;
mod render;
mod routes;
mod rubric;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::llm_client::GeminiClient;
use crate::mailer::ResendMailer;
use crate::routes::build_router;
use crate::rubric::PdfTextExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API keys)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CARR API v{}", env!("CARGO_PKG_VERSION"));

    let generator = GeminiClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let mailer = ResendMailer::new(config.resend_api_key.clone())?;
    info!("Resend mailer initialized (from: {})", config.email_from);

    info!("Reference documents: {}", config.docs_dir.display());

    let page_config = default_page_config();
    info!(
        "Layout page config: {}x{}pt, margin {}pt",
        page_config.page_width_pt, page_config.page_height_pt, page_config.margin_pt
    );

    let state = AppState {
        generator: Arc::new(generator),
        extractor: Arc::new(PdfTextExtractor),
        mailer: Arc::new(mailer),
        config: config.clone(),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
