use std::collections::HashMap;

use serde::Deserialize;

pub const DEFAULT_TOPIC: &str = "default";

#[derive(Debug, Clone, Deserialize)]
pub struct TopicKeywords {
    pub topic: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Destination {
    /// One-paragraph "why this country" used by statement-of-purpose drafts.
    pub pitch: String,
    /// Canned advisor replies keyed by topic, including `default`.
    pub replies: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorContent {
    pub default_country: String,
    /// Checked in order; the first topic with a matching keyword wins.
    pub topics: Vec<TopicKeywords>,
    pub destinations: HashMap<String, Destination>,
}

impl AdvisorContent {
    pub fn destination(&self, country: &str) -> Option<&Destination> {
        let country = country.trim();
        self.destinations
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(country))
            .map(|(_, destination)| destination)
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        if self.destination(&self.default_country).is_none() {
            return Err(format!(
                "default country '{}' has no destination entry",
                self.default_country
            ));
        }
        for (name, destination) in &self.destinations {
            if !destination.replies.contains_key(DEFAULT_TOPIC) {
                return Err(format!("{name}: missing '{DEFAULT_TOPIC}' reply"));
            }
        }
        Ok(())
    }
}
