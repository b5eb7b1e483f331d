//! Axum route handlers for the Documents extraction API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::demo::demo_fields;
use crate::extraction::extract;
use crate::extraction::fields::{DocumentType, ExtractedFields};
use crate::state::AppState;

pub const OCR_PROVIDER: &str = "ocr.space";
pub const DEMO_PROVIDER: &str = "demo";

/// Phone photos of documents routinely exceed axum's 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_DOCUMENT_TYPE: &str = "passport";
const DEFAULT_MIME_TYPE: &str = "image/jpeg";
/// Recognised text this short (after trimming) is treated as a failed read.
const MIN_OCR_CHARS: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub raw_text: String,
    #[serde(default)]
    pub document_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub data: ExtractedFields,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: ExtractedFields,
    pub provider: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

struct Upload {
    file: Option<(Bytes, String)>,
    document_type: String,
}

fn document_type_or_default(label: Option<String>) -> String {
    label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_DOCUMENT_TYPE.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/extract
///
/// Runs the field extractor over text the client already has. Never fails on
/// content; an empty result is still a 200.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let document_type = document_type_or_default(request.document_type);
    let data = extract(&request.raw_text, &document_type, &state.catalog.extraction);
    Json(ExtractResponse { data })
}

/// POST /api/v1/documents/analyze
///
/// Multipart upload (`file`, optional `type`). OCR failures and near-empty
/// reads fall back to demo data instead of surfacing an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let Some((bytes, mime_type)) = upload.file else {
        return Err(AppError::Validation("No file provided".to_string()));
    };
    let document_type = upload.document_type;

    info!(
        "Analyzing {} byte {} upload as '{}'",
        bytes.len(),
        mime_type,
        document_type
    );

    match state.ocr.recognize(bytes, &mime_type).await {
        Ok(text) if text.trim().chars().count() >= MIN_OCR_CHARS => {
            let data = extract(&text, &document_type, &state.catalog.extraction);
            return Ok(Json(AnalyzeResponse {
                success: true,
                data,
                provider: OCR_PROVIDER,
                raw_text: Some(text),
            }));
        }
        Ok(text) => warn!(
            "OCR returned too little text ({} chars)",
            text.trim().chars().count()
        ),
        Err(e) => warn!("OCR failed, using demo data: {e}"),
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        data: demo_fields(DocumentType::from_label(&document_type)),
        provider: DEMO_PROVIDER,
        raw_text: None,
    }))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut file = None;
    let mut document_type = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let mime_type = field
                    .content_type()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;
                file = Some((bytes, mime_type));
            }
            "type" => document_type = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(Upload {
        file,
        document_type: document_type_or_default(document_type),
    })
}
