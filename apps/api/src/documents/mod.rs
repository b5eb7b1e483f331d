// Visa document drafting: statements of purpose and cover letters.
// The generator is tried first; the deterministic templates are the fallback.

pub mod handlers;
pub mod prompts;
pub mod templates;

use serde::Deserialize;

pub const DEFAULT_DEGREE: &str = "Bachelor's";
pub const DEFAULT_YEARS: i64 = 3;
const MAX_TEMPLATE_SKILLS: usize = 5;
const GENERIC_SKILLS: &str =
    "software development, project management, and technical analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    StatementOfPurpose,
    CoverLetter,
}

impl DocumentKind {
    /// "sop" selects a statement of purpose; anything else is a cover letter.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("sop") {
            DocumentKind::StatementOfPurpose
        } else {
            DocumentKind::CoverLetter
        }
    }
}

/// The slice of the applicant profile drafting needs. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftProfile {
    pub degree_level: Option<String>,
    pub years_experience: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub has_job_offer: Option<bool>,
}

impl DraftProfile {
    pub fn degree(&self) -> &str {
        self.degree_level
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DEGREE)
    }

    /// Zero and negative values are treated as unspecified.
    pub fn years(&self) -> i64 {
        self.years_experience
            .filter(|y| *y > 0)
            .unwrap_or(DEFAULT_YEARS)
    }

    pub fn has_job_offer(&self) -> bool {
        self.has_job_offer.unwrap_or(false)
    }

    fn listed_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Every listed skill, or `None` when there are none.
    pub fn all_skills(&self) -> Option<String> {
        let skills: Vec<&str> = self.listed_skills().collect();
        (!skills.is_empty()).then(|| skills.join(", "))
    }

    /// The first five skills, or a generic phrase.
    pub fn headline_skills(&self) -> String {
        let skills: Vec<&str> = self.listed_skills().take(MAX_TEMPLATE_SKILLS).collect();
        if skills.is_empty() {
            GENERIC_SKILLS.to_string()
        } else {
            skills.join(", ")
        }
    }
}
