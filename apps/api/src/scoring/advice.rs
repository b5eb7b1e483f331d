use crate::scoring::models::{Profile, RequirementAssessment, RequirementStatus};
use crate::scoring::rules::RuleKind;

const MAX_REQUIREMENT_SUGGESTIONS: usize = 3;

/// Improvement advice: the first three missing requirements in table order,
/// then a note on any declared rejection.
pub fn build_suggestions(breakdown: &[RequirementAssessment], profile: &Profile) -> Vec<String> {
    let mut suggestions: Vec<String> = breakdown
        .iter()
        .filter(|a| a.status == RequirementStatus::Missing)
        .take(MAX_REQUIREMENT_SUGGESTIONS)
        .map(|a| suggestion_for(a.rule, &a.label))
        .collect();

    if profile.has_previous_visa_rejection {
        suggestions.push(
            "Prepare a clear written explanation of your previous visa rejection; \
             it currently costs 10 points."
                .to_string(),
        );
    }

    suggestions
}

fn suggestion_for(rule: Option<RuleKind>, label: &str) -> String {
    match rule {
        Some(RuleKind::Education) => {
            format!("Obtain a recognized degree or qualification to satisfy \"{label}\".")
        }
        Some(RuleKind::JobOffer) => {
            format!("Secure a qualifying job offer to satisfy \"{label}\".")
        }
        Some(RuleKind::Experience) => {
            format!("Build more relevant work experience towards \"{label}\".")
        }
        Some(RuleKind::English) => {
            format!("Retake the language test and aim for IELTS 6.5 or higher for \"{label}\".")
        }
        Some(RuleKind::Age) => format!(
            "\"{label}\" favours younger applicants; strengthen other criteria to compensate."
        ),
        Some(RuleKind::HealthInsurance) => {
            format!("Arrange health cover or a medical exam for \"{label}\".")
        }
        Some(RuleKind::CleanRecord) => {
            format!("Request a police clearance certificate for \"{label}\".")
        }
        Some(RuleKind::Passport) => format!("Apply for or renew your passport for \"{label}\"."),
        Some(RuleKind::Funds) => format!("Gather bank statements as proof of funds for \"{label}\"."),
        Some(RuleKind::Skills) => {
            format!("List more verifiable skills or book a skills assessment for \"{label}\".")
        }
        Some(RuleKind::Optional) | None => format!("Review \"{label}\" with an advisor."),
    }
}
