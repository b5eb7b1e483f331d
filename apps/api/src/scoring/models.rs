use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::RequirementCategory;
use crate::scoring::rules::RuleKind;

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// Highest completed qualification. Unrecognised strings deserialize to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeLevel {
    #[default]
    None,
    Diploma,
    #[serde(rename = "Bachelor's", alias = "Bachelors")]
    Bachelors,
    #[serde(rename = "Master's", alias = "Masters")]
    Masters,
    #[serde(rename = "PhD", alias = "Doctorate", alias = "PhD/Doctorate")]
    Doctorate,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    German,
    French,
}

/// IELTS-like band scores, 0–9.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageScores {
    #[serde(deserialize_with = "lenient_band")]
    pub english: f64,
    #[serde(deserialize_with = "lenient_band")]
    pub german: f64,
    #[serde(deserialize_with = "lenient_band")]
    pub french: f64,
}

impl LanguageScores {
    pub fn band(&self, language: Language) -> f64 {
        match language {
            Language::English => self.english,
            Language::German => self.german,
            Language::French => self.french,
        }
    }
}

/// Self-reported applicant profile. Every field is optional on the wire, and a
/// value of the wrong shape counts as absent rather than failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient_bool")]
    pub has_passport: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_degree: bool,
    #[serde(deserialize_with = "lenient_or_default")]
    pub degree_level: DegreeLevel,
    #[serde(deserialize_with = "lenient_whole")]
    pub years_experience: i32,
    #[serde(deserialize_with = "lenient_or_default")]
    pub skills: BTreeSet<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub language_scores: LanguageScores,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_job_offer: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_funds: bool,
    #[serde(deserialize_with = "lenient_whole")]
    pub age: i32,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_health_insurance: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_clean_record: bool,
    #[serde(deserialize_with = "lenient_or_default")]
    pub field_of_work: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub passport_country: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_previous_visa_rejection: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_relatives_in_country: bool,
}

impl Profile {
    pub fn years_experience(&self) -> i32 {
        self.years_experience.max(0)
    }

    pub fn age(&self) -> i32 {
        self.age.max(0)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().filter(|s| !s.trim().is_empty()).count()
    }
}

// Only a JSON `true` is true.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

// Fractions are floored and out-of-range numbers saturate at the i32 bounds.
fn lenient_whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let whole = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map_or(0, |v| v.floor() as i32),
        _ => 0,
    };
    Ok(whole)
}

fn lenient_band<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let band = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(band)
}

pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Met,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitiveLevel {
    High,
    Medium,
    Low,
}

impl CompetitiveLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            CompetitiveLevel::High
        } else if score >= 60 {
            CompetitiveLevel::Medium
        } else {
            CompetitiveLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusSource {
    JobOffer,
    ExperienceFiveYears,
    ExperienceTenYears,
    EnglishFluency,
    FieldOfWork,
    PassportStrength,
    PreviousRejection,
    DestinationLanguage,
    RelativesInCountry,
}

/// A score adjustment applied outside the weighted requirement sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusAdjustment {
    pub source: BonusSource,
    pub points: i32,
}

impl BonusAdjustment {
    pub fn new(source: BonusSource, points: i32) -> Self {
        Self { source, points }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRequirement {
    pub label: String,
    pub score: u8,
    pub max_score: u8,
}

/// How one requirement fared against the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementAssessment {
    pub id: String,
    pub label: String,
    pub category: RequirementCategory,
    pub weight: u8,
    /// `None` when the requirement id has no scoring rule.
    pub rule: Option<RuleKind>,
    pub percent_met: u8,
    pub status: RequirementStatus,
    /// `percent_met / 100 * weight`
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub country: String,
    pub visa_type: String,
    /// Always within [5, 100].
    pub score: u8,
    pub met_requirements: Vec<String>,
    pub partial_requirements: Vec<PartialRequirement>,
    pub missing_requirements: Vec<String>,
    pub bonus_points: i32,
    pub competitive_level: CompetitiveLevel,
    pub breakdown: Vec<RequirementAssessment>,
    pub bonuses: Vec<BonusAdjustment>,
    pub suggestions: Vec<String>,
}
