use std::sync::Arc;

use crate::catalog::Catalog;
use crate::llm_client::TextGenerator;
use crate::ocr_client::OcrProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Rule and content tables, loaded once at start-up.
    pub catalog: Arc<Catalog>,
    pub ocr: Arc<dyn OcrProvider>,
    /// `DisabledGenerator` when no API key is configured.
    pub llm: Arc<dyn TextGenerator>,
}
