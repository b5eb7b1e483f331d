mod advisor;
mod catalog;
mod config;
mod documents;
mod errors;
mod extraction;
mod llm_client;
mod ocr_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::{DisabledGenerator, GeminiClient, TextGenerator};
use crate::ocr_client::OcrSpaceClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting VisaVerse API v{}", env!("CARGO_PKG_VERSION"));

    // Rule tables: built-in, with per-file overrides from CATALOG_DIR
    let catalog = Catalog::load(config.catalog_dir.as_deref())?;
    info!(
        "Catalog loaded: {} destinations, {} skills, {} title patterns",
        catalog.visa.countries.len(),
        catalog.extraction.skill_vocabulary.len(),
        catalog.extraction.title_patterns.len()
    );

    let ocr = OcrSpaceClient::new(
        config.ocr_api_url.clone(),
        config.ocr_api_key.clone(),
        config.ocr_timeout,
    )?;
    info!("OCR client initialized ({})", config.ocr_api_url);

    let llm: Arc<dyn TextGenerator> = match &config.gemini_api_key {
        Some(key) => {
            let client =
                GeminiClient::new(key.clone(), config.gemini_model.clone(), config.llm_timeout)?;
            info!("LLM client initialized (model: {})", client.model());
            Arc::new(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; documents and chat will use templates");
            Arc::new(DisabledGenerator)
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        ocr: Arc::new(ocr),
        llm,
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
