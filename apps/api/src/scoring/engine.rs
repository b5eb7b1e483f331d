//! Visa success scoring.
//!
//! Algorithm:
//! 1. For each requirement of the destination, resolve its rule and compute a
//!    graduated percent-met (unknown ids get a flat 50% partial).
//! 2. base = Σ(percent_met / 100 × weight)
//! 3. bonus = per-rule bonuses + profile-wide adjustments (field, passport,
//!    rejection, destination language, relatives). Uncapped until step 4.
//! 4. score = round(base + bonus) clamped to [5, 100].

use thiserror::Error;
use tracing::debug;

use crate::catalog::VisaRules;
use crate::scoring::advice::build_suggestions;
use crate::scoring::bonus::profile_adjustments;
use crate::scoring::models::{
    CompetitiveLevel, PartialRequirement, Profile, RequirementAssessment, RequirementStatus,
    ScoreResult,
};
use crate::scoring::rules::unscored_outcome;

pub const MIN_SCORE: u8 = 5;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Error)]
#[error("Unknown destination country: {0}")]
pub struct UnknownCountryError(pub String);

/// Stateless scorer over the shared rule tables. Never mutates the profile.
pub struct VisaScorer<'a> {
    rules: &'a VisaRules,
}

impl<'a> VisaScorer<'a> {
    pub fn new(rules: &'a VisaRules) -> Self {
        Self { rules }
    }

    pub fn score(
        &self,
        profile: &Profile,
        country_id: &str,
    ) -> Result<ScoreResult, UnknownCountryError> {
        let country = self
            .rules
            .find_country(country_id)
            .ok_or_else(|| UnknownCountryError(country_id.to_string()))?;

        let mut breakdown = Vec::with_capacity(country.requirements.len());
        let mut bonuses = Vec::new();
        let mut base_score = 0.0_f64;

        for requirement in &country.requirements {
            let rule = self.rules.rule_for(&requirement.id);
            let outcome = match rule {
                Some(rule) => rule.evaluate(profile, country),
                None => unscored_outcome(),
            };

            let points = f64::from(outcome.percent_met) / 100.0 * f64::from(requirement.weight);
            base_score += points;
            bonuses.extend(outcome.bonuses);

            breakdown.push(RequirementAssessment {
                id: requirement.id.clone(),
                label: requirement.label.clone(),
                category: requirement.category,
                weight: requirement.weight,
                rule,
                percent_met: outcome.percent_met,
                status: outcome.status,
                points,
            });
        }

        bonuses.extend(profile_adjustments(profile, country, self.rules));
        let bonus_points: i32 = bonuses.iter().map(|b| b.points).sum();

        let score = clamp_score(base_score + f64::from(bonus_points));

        debug!(
            "Scored {}: base={:.2} bonus={} final={}",
            country.id, base_score, bonus_points, score
        );

        let mut met_requirements = Vec::new();
        let mut partial_requirements = Vec::new();
        let mut missing_requirements = Vec::new();
        for assessment in &breakdown {
            match assessment.status {
                RequirementStatus::Met => met_requirements.push(assessment.label.clone()),
                RequirementStatus::Partial => partial_requirements.push(PartialRequirement {
                    label: assessment.label.clone(),
                    score: assessment.percent_met,
                    max_score: 100,
                }),
                RequirementStatus::Missing => missing_requirements.push(assessment.label.clone()),
            }
        }

        let suggestions = build_suggestions(&breakdown, profile);

        Ok(ScoreResult {
            country: country.id.clone(),
            visa_type: country.visa_type.clone(),
            score,
            met_requirements,
            partial_requirements,
            missing_requirements,
            bonus_points,
            competitive_level: CompetitiveLevel::from_score(score),
            breakdown,
            bonuses,
            suggestions,
        })
    }
}

/// Never 0 (that would read as "impossible"), never above 100.
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}
