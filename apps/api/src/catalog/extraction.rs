use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use super::CatalogError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionFile {
    pub name_stop_words: Vec<String>,
    pub skill_vocabulary: Vec<String>,
    pub title_patterns: Vec<String>,
    pub issuing_countries: Vec<String>,
}

/// Vocabulary for the document field extractor, with title patterns compiled.
#[derive(Debug)]
pub struct ExtractionRules {
    /// Lowercased. A line containing any of these is never taken as a name.
    pub name_stop_words: Vec<String>,
    /// Skills are reported in this order, not in the order they appear in text.
    pub skill_vocabulary: Vec<String>,
    /// Case-insensitive; the first pattern in this list that matches wins.
    pub title_patterns: Vec<Regex>,
    pub issuing_countries: Vec<String>,
}

impl ExtractionRules {
    pub fn compile(file: ExtractionFile) -> Result<Self, CatalogError> {
        let title_patterns = file
            .title_patterns
            .into_iter()
            .map(|pattern| {
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| CatalogError::Pattern { pattern, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name_stop_words: file
                .name_stop_words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            skill_vocabulary: file.skill_vocabulary,
            title_patterns,
            issuing_countries: file.issuing_countries,
        })
    }
}
