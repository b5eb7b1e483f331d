use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::models::Language;
use crate::scoring::rules::{AgeScale, RuleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Education,
    Employment,
    Financial,
    Language,
    Documents,
    Personal,
}

/// One scored criterion for a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRequirement {
    pub id: String,
    pub label: String,
    pub category: RequirementCategory,
    /// Points out of roughly 100 across the destination's requirement set.
    pub weight: u8,
}

/// Bonus for holding a score in the destination's own language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBonus {
    pub language: Language,
    pub min_score: f64,
    pub points: i32,
}

/// A destination country: static visa facts plus its scoring knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    pub id: String,
    pub flag: String,
    pub visa_type: String,
    pub processing_time: String,
    /// Published baseline approval rate, informational only.
    pub success_rate: u8,
    #[serde(default = "default_min_experience_years")]
    pub min_experience_years: f64,
    #[serde(default)]
    pub age_scale: AgeScale,
    #[serde(default = "default_stem_bonus")]
    pub stem_bonus: i32,
    #[serde(default = "default_finance_bonus")]
    pub finance_bonus: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_bonus: Option<LanguageBonus>,
    pub requirements: Vec<CountryRequirement>,
}

fn default_min_experience_years() -> f64 {
    3.0
}

fn default_stem_bonus() -> i32 {
    5
}

fn default_finance_bonus() -> i32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBuckets {
    pub stem: Vec<String>,
    pub finance: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassportTiers {
    pub tier1: Vec<String>,
    pub tier2: Vec<String>,
    /// Listed for reference; tier 3 earns nothing, same as an unlisted passport.
    pub tier3: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRules {
    pub countries: Vec<CountryProfile>,
    /// Requirement id → scoring rule. Ids missing here score a flat partial.
    pub rules: HashMap<String, RuleKind>,
    pub fields: FieldBuckets,
    pub passport_tiers: PassportTiers,
}

impl VisaRules {
    /// Case-insensitive lookup by country id.
    pub fn find_country(&self, id: &str) -> Option<&CountryProfile> {
        let id = id.trim();
        self.countries
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn rule_for(&self, requirement_id: &str) -> Option<RuleKind> {
        self.rules.get(requirement_id).copied()
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        for country in &self.countries {
            if let Some(req) = country.requirements.iter().find(|r| r.weight > 100) {
                return Err(format!(
                    "{}: requirement '{}' has weight {} (max 100)",
                    country.id, req.id, req.weight
                ));
            }
            if country.min_experience_years <= 0.0 {
                return Err(format!(
                    "{}: minExperienceYears must be positive",
                    country.id
                ));
            }
        }
        Ok(())
    }
}

/// Case-insensitive membership test used by the field and passport tables.
pub fn list_contains(list: &[String], value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && list.iter().any(|v| v.eq_ignore_ascii_case(value))
}
