use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::ocr_client::{DEFAULT_OCR_API_KEY, DEFAULT_OCR_API_URL};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Nothing is required; a missing Gemini key disables text generation.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Overrides for the built-in catalog files.
    pub catalog_dir: Option<PathBuf>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub llm_timeout: Duration,
    pub ocr_api_url: String,
    pub ocr_api_key: String,
    pub ocr_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_dir: optional_env("CATALOG_DIR").map(PathBuf::from),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_timeout: timeout_env("LLM_TIMEOUT_SECS")?,
            ocr_api_url: optional_env("OCR_API_URL")
                .unwrap_or_else(|| DEFAULT_OCR_API_URL.to_string()),
            ocr_api_key: optional_env("OCR_API_KEY")
                .unwrap_or_else(|| DEFAULT_OCR_API_KEY.to_string()),
            ocr_timeout: timeout_env("OCR_TIMEOUT_SECS")?,
        })
    }
}

/// Unset and blank are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn timeout_env(key: &str) -> Result<Duration> {
    let secs = match optional_env(key) {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}
