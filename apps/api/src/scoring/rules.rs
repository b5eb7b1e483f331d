//! Per-requirement scoring rules.
//!
//! Each rule turns the profile into a graduated percent-met value, classifies
//! it with its own thresholds, and may emit bonus points of its own.

use serde::{Deserialize, Serialize};

use crate::catalog::CountryProfile;
use crate::scoring::models::{
    BonusAdjustment, BonusSource, DegreeLevel, Profile, RequirementStatus,
};

/// Percent-met and status given to requirement ids with no rule, and to
/// optional criteria that cannot be verified from the profile.
pub const UNSCORED_PERCENT: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Education,
    JobOffer,
    Experience,
    English,
    Age,
    HealthInsurance,
    CleanRecord,
    Passport,
    Funds,
    Skills,
    Optional,
}

/// Age curve used by a destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeScale {
    /// Points-tested systems that reward younger applicants.
    Points,
    #[default]
    Flexible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub percent_met: u8,
    pub status: RequirementStatus,
    pub bonuses: Vec<BonusAdjustment>,
}

impl RuleKind {
    pub fn evaluate(self, profile: &Profile, country: &CountryProfile) -> RuleOutcome {
        let percent_met = self.percent_met(profile, country);
        RuleOutcome {
            percent_met,
            status: self.classify(percent_met),
            bonuses: self.bonuses(profile),
        }
    }

    fn percent_met(self, profile: &Profile, country: &CountryProfile) -> u8 {
        match self {
            RuleKind::Education => education_percent(profile.has_degree, profile.degree_level),
            RuleKind::JobOffer => binary_percent(profile.has_job_offer),
            RuleKind::Experience => {
                experience_percent(profile.years_experience(), country.min_experience_years)
            }
            RuleKind::English => english_percent(profile.language_scores.english),
            RuleKind::Age => age_percent(profile.age(), country.age_scale),
            RuleKind::HealthInsurance => binary_percent(profile.has_health_insurance),
            RuleKind::CleanRecord => binary_percent(profile.has_clean_record),
            RuleKind::Passport => binary_percent(profile.has_passport),
            RuleKind::Funds => binary_percent(profile.has_funds),
            RuleKind::Skills => skills_percent(profile.skill_count()),
            RuleKind::Optional => UNSCORED_PERCENT,
        }
    }

    /// Thresholds differ per rule; there is no global cut-off.
    fn classify(self, percent_met: u8) -> RequirementStatus {
        match self {
            RuleKind::Education => graded(percent_met, 75, 1),
            RuleKind::Experience => graded(percent_met, 100, 50),
            RuleKind::English | RuleKind::Age => graded(percent_met, 75, 40),
            RuleKind::Skills => graded(percent_met, 75, 50),
            RuleKind::JobOffer
            | RuleKind::HealthInsurance
            | RuleKind::CleanRecord
            | RuleKind::Passport
            | RuleKind::Funds => {
                if percent_met == 100 {
                    RequirementStatus::Met
                } else {
                    RequirementStatus::Missing
                }
            }
            RuleKind::Optional => RequirementStatus::Partial,
        }
    }

    fn bonuses(self, profile: &Profile) -> Vec<BonusAdjustment> {
        let mut bonuses = Vec::new();
        match self {
            RuleKind::JobOffer if profile.has_job_offer => {
                bonuses.push(BonusAdjustment::new(BonusSource::JobOffer, 5));
            }
            RuleKind::Experience => {
                let years = profile.years_experience();
                if years >= 5 {
                    bonuses.push(BonusAdjustment::new(BonusSource::ExperienceFiveYears, 3));
                }
                if years >= 10 {
                    bonuses.push(BonusAdjustment::new(BonusSource::ExperienceTenYears, 5));
                }
            }
            RuleKind::English if profile.language_scores.english >= 8.0 => {
                bonuses.push(BonusAdjustment::new(BonusSource::EnglishFluency, 5));
            }
            _ => {}
        }
        bonuses
    }
}

/// Outcome for a requirement id the rule table does not know.
pub fn unscored_outcome() -> RuleOutcome {
    RuleOutcome {
        percent_met: UNSCORED_PERCENT,
        status: RequirementStatus::Partial,
        bonuses: Vec::new(),
    }
}

fn graded(percent_met: u8, met_at: u8, partial_at: u8) -> RequirementStatus {
    if percent_met >= met_at {
        RequirementStatus::Met
    } else if percent_met >= partial_at {
        RequirementStatus::Partial
    } else {
        RequirementStatus::Missing
    }
}

fn binary_percent(present: bool) -> u8 {
    if present {
        100
    } else {
        0
    }
}

pub fn education_percent(has_degree: bool, level: DegreeLevel) -> u8 {
    if !has_degree {
        return 0;
    }
    match level {
        DegreeLevel::Doctorate => 100,
        DegreeLevel::Masters => 90,
        DegreeLevel::Bachelors => 75,
        DegreeLevel::Diploma => 50,
        // A degree is claimed but the level is blank or unrecognised.
        DegreeLevel::None | DegreeLevel::Other => 25,
    }
}

pub fn experience_percent(years: i32, min_required: f64) -> u8 {
    let years = f64::from(years);
    if years >= min_required {
        100
    } else if years >= min_required * 0.75 {
        75
    } else if years >= min_required * 0.5 {
        50
    } else if years > 0.0 {
        25
    } else {
        0
    }
}

/// IELTS band → percent.
pub fn english_percent(band: f64) -> u8 {
    if band >= 8.0 {
        100
    } else if band >= 7.0 {
        90
    } else if band >= 6.5 {
        75
    } else if band >= 6.0 {
        60
    } else if band >= 5.5 {
        40
    } else if band >= 5.0 {
        25
    } else {
        0
    }
}

pub fn age_percent(age: i32, scale: AgeScale) -> u8 {
    match scale {
        AgeScale::Points => match age {
            18..=29 => 100,
            30..=34 => 90,
            35..=39 => 75,
            40..=44 => 50,
            45.. => 25,
            _ => 0,
        },
        AgeScale::Flexible => match age {
            18..=50 => 100,
            51..=60 => 70,
            61.. => 40,
            _ => 0,
        },
    }
}

pub fn skills_percent(count: usize) -> u8 {
    match count {
        0 => 0,
        1..=2 => 50,
        3..=4 => 75,
        _ => 100,
    }
}
