//! Catalog: the content tables the scoring engine, field extractor and
//! advisor read from.
//!
//! Three JSON documents are compiled into the binary. Any of them can be
//! replaced at start-up by dropping a file with the same name into
//! `CATALOG_DIR`. The catalog is loaded once in `main` and shared read-only.

pub mod advisor;
pub mod extraction;
pub mod visa;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

pub use advisor::AdvisorContent;
pub use extraction::ExtractionRules;
pub use visa::{CountryProfile, CountryRequirement, RequirementCategory, VisaRules};

const VISA_RULES_FILE: &str = "visa_rules.json";
const EXTRACTION_FILE: &str = "extraction.json";
const ADVISOR_FILE: &str = "advisor.json";

const BUILTIN_VISA_RULES: &str = include_str!("../../data/visa_rules.json");
const BUILTIN_EXTRACTION: &str = include_str!("../../data/extraction.json");
const BUILTIN_ADVISOR: &str = include_str!("../../data/advisor.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid title pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid {file}: {message}")]
    Invalid {
        file: &'static str,
        message: String,
    },
}

/// Read-only content tables shared by every request.
#[derive(Debug)]
pub struct Catalog {
    pub visa: VisaRules,
    pub extraction: ExtractionRules,
    pub advisor: AdvisorContent,
}

impl Catalog {
    /// The tables compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sources(BUILTIN_VISA_RULES, BUILTIN_EXTRACTION, BUILTIN_ADVISOR)
    }

    /// Loads the catalog, preferring files found in `dir` over the built-in copies.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let Some(dir) = dir else {
            return Self::builtin();
        };

        let visa = read_or_builtin(dir, VISA_RULES_FILE, BUILTIN_VISA_RULES)?;
        let extraction = read_or_builtin(dir, EXTRACTION_FILE, BUILTIN_EXTRACTION)?;
        let advisor = read_or_builtin(dir, ADVISOR_FILE, BUILTIN_ADVISOR)?;

        Self::from_sources(&visa, &extraction, &advisor)
    }

    fn from_sources(visa: &str, extraction: &str, advisor: &str) -> Result<Self, CatalogError> {
        let visa: VisaRules = parse(VISA_RULES_FILE, visa)?;
        visa.validate().map_err(|message| CatalogError::Invalid {
            file: VISA_RULES_FILE,
            message,
        })?;

        let extraction = ExtractionRules::compile(parse(EXTRACTION_FILE, extraction)?)?;

        let advisor: AdvisorContent = parse(ADVISOR_FILE, advisor)?;
        advisor
            .validate()
            .map_err(|message| CatalogError::Invalid {
                file: ADVISOR_FILE,
                message,
            })?;

        Ok(Self {
            visa,
            extraction,
            advisor,
        })
    }
}

fn read_or_builtin(dir: &Path, file: &str, builtin: &str) -> Result<String, CatalogError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(builtin.to_string());
    }

    info!("Loading {} from {}", file, path.display());
    std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
}

fn parse<T: DeserializeOwned>(file: &'static str, source: &str) -> Result<T, CatalogError> {
    serde_json::from_str(source).map_err(|source| CatalogError::Parse { file, source })
}
