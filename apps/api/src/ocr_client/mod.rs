/// OCR client: image bytes in, best-effort plain text out.
///
/// The default provider posts a base64 data URI to an OCR.space-compatible
/// endpoint. Callers treat every error as "no text" and fall back to demo data.
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_OCR_API_URL: &str = "https://api.ocr.space/parse/image";
/// OCR.space's public demo key.
pub const DEFAULT_OCR_API_KEY: &str = "helloworld";

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("OCR service could not process the image: {0}")]
    Processing(String),

    #[error("OCR returned no parsed results")]
    NoResults,
}

#[async_trait]
pub trait OcrProvider: Send + Sync {
    async fn recognize(&self, image: Bytes, mime_type: &str) -> Result<String, OcrError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrSpaceResponse {
    #[serde(default)]
    pub parsed_results: Option<Vec<ParsedResult>>,
    #[serde(default)]
    pub is_errored_on_processing: bool,
    /// A string or a list of strings depending on the failure.
    #[serde(default)]
    pub error_message: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    #[serde(default)]
    pub parsed_text: String,
}

impl OcrSpaceResponse {
    pub fn into_text(self) -> Result<String, OcrError> {
        if let Some(result) = self.parsed_results.and_then(|r| r.into_iter().next()) {
            return Ok(result.parsed_text);
        }
        if self.is_errored_on_processing {
            let message = match self.error_message {
                Some(serde_json::Value::String(s)) => s,
                Some(serde_json::Value::Array(items)) => items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
                _ => "unknown error".to_string(),
            };
            return Err(OcrError::Processing(message));
        }
        Err(OcrError::NoResults)
    }
}

#[derive(Clone)]
pub struct OcrSpaceClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OcrSpaceClient {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, OcrError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }
}

pub fn data_uri(image: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(image))
}

#[async_trait]
impl OcrProvider for OcrSpaceClient {
    async fn recognize(&self, image: Bytes, mime_type: &str) -> Result<String, OcrError> {
        let form = [
            ("base64Image", data_uri(&image, mime_type)),
            ("language", "eng".to_string()),
            ("isOverlayRequired", "false".to_string()),
            ("detectOrientation", "true".to_string()),
            ("scale", "true".to_string()),
            ("OCREngine", "2".to_string()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("apikey", &self.api_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OcrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.json::<OcrSpaceResponse>().await?.into_text()?;
        debug!("OCR recognised {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri(b"hi", "image/png"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_parsed_text_is_taken_from_first_result() {
        let response: OcrSpaceResponse = serde_json::from_str(
            r#"{"ParsedResults": [{"ParsedText": "JOHN DOE\r\n"}, {"ParsedText": "ignored"}],
                "IsErroredOnProcessing": false}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "JOHN DOE\r\n");
    }

    #[test]
    fn test_processing_error_messages_are_joined() {
        let response: OcrSpaceResponse = serde_json::from_str(
            r#"{"IsErroredOnProcessing": true, "ErrorMessage": ["File too large", "Retry"]}"#,
        )
        .unwrap();
        let err = response.into_text().unwrap_err();
        assert!(matches!(err, OcrError::Processing(m) if m == "File too large; Retry"));
    }

    #[test]
    fn test_missing_results() {
        let response: OcrSpaceResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(response.into_text(), Err(OcrError::NoResults)));
    }
}
