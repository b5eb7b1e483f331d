//! Axum route handlers for the document drafting API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::documents::prompts::build_prompt;
use crate::documents::templates::render;
use crate::documents::{DocumentKind, DraftProfile};
use crate::errors::AppError;
use crate::llm_client::prompts::DRAFTING_SYSTEM;
use crate::state::AppState;

pub const TEMPLATE_PROVIDER: &str = "template";

#[derive(Debug, Deserialize)]
pub struct GenerateDocumentRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub profile: DraftProfile,
}

#[derive(Debug, Serialize)]
pub struct GenerateDocumentResponse {
    pub content: String,
    pub provider: &'static str,
}

/// POST /api/v1/documents/generate
///
/// Drafts a statement of purpose or cover letter. Generator failures are
/// logged and answered with the template draft, never surfaced.
pub async fn handle_generate_document(
    State(state): State<AppState>,
    Json(request): Json<GenerateDocumentRequest>,
) -> Result<Json<GenerateDocumentResponse>, AppError> {
    if request.kind.trim().is_empty() {
        return Err(AppError::Validation("type cannot be empty".to_string()));
    }

    let kind = DocumentKind::from_label(&request.kind);
    let country = request
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&state.catalog.advisor.default_country);

    let prompt = build_prompt(kind, country, &request.profile);
    match state.llm.generate(&prompt, DRAFTING_SYSTEM).await {
        Ok(content) => {
            info!("Drafted {:?} for {} via {}", kind, country, state.llm.provider());
            return Ok(Json(GenerateDocumentResponse {
                content,
                provider: state.llm.provider(),
            }));
        }
        Err(e) => warn!("Document generation unavailable, using template: {e}"),
    }

    let content = render(kind, country, &request.profile, &state.catalog.advisor);
    Ok(Json(GenerateDocumentResponse {
        content,
        provider: TEMPLATE_PROVIDER,
    }))
}
