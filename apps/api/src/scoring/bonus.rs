//! Profile-wide adjustments that sit outside the weighted requirement sum.

use crate::catalog::visa::list_contains;
use crate::catalog::{CountryProfile, VisaRules};
use crate::scoring::models::{BonusAdjustment, BonusSource, Profile};

const REJECTION_PENALTY: i32 = -10;
const RELATIVES_BONUS: i32 = 3;
const TIER1_PASSPORT_BONUS: i32 = 5;
const TIER2_PASSPORT_BONUS: i32 = 2;

/// Returns only the adjustments that actually apply (no zero entries).
pub fn profile_adjustments(
    profile: &Profile,
    country: &CountryProfile,
    rules: &VisaRules,
) -> Vec<BonusAdjustment> {
    [
        (BonusSource::FieldOfWork, field_bonus(profile, country, rules)),
        (BonusSource::PassportStrength, passport_bonus(profile, rules)),
        (BonusSource::PreviousRejection, rejection_penalty(profile)),
        (BonusSource::DestinationLanguage, destination_language_bonus(profile, country)),
        (BonusSource::RelativesInCountry, relatives_bonus(profile)),
    ]
    .into_iter()
    .filter(|(_, points)| *points != 0)
    .map(|(source, points)| BonusAdjustment::new(source, points))
    .collect()
}

/// STEM and finance buckets are disjoint; STEM is checked first.
fn field_bonus(profile: &Profile, country: &CountryProfile, rules: &VisaRules) -> i32 {
    if list_contains(&rules.fields.stem, &profile.field_of_work) {
        country.stem_bonus
    } else if list_contains(&rules.fields.finance, &profile.field_of_work) {
        country.finance_bonus
    } else {
        0
    }
}

fn passport_bonus(profile: &Profile, rules: &VisaRules) -> i32 {
    let tiers = &rules.passport_tiers;
    if list_contains(&tiers.tier1, &profile.passport_country) {
        TIER1_PASSPORT_BONUS
    } else if list_contains(&tiers.tier2, &profile.passport_country) {
        TIER2_PASSPORT_BONUS
    } else {
        0
    }
}

fn rejection_penalty(profile: &Profile) -> i32 {
    if profile.has_previous_visa_rejection {
        REJECTION_PENALTY
    } else {
        0
    }
}

fn destination_language_bonus(profile: &Profile, country: &CountryProfile) -> i32 {
    match &country.language_bonus {
        Some(bonus) if profile.language_scores.band(bonus.language) >= bonus.min_score => {
            bonus.points
        }
        _ => 0,
    }
}

fn relatives_bonus(profile: &Profile) -> i32 {
    if profile.has_relatives_in_country {
        RELATIVES_BONUS
    } else {
        0
    }
}
