//! Deterministic drafts used when the generator is unavailable.

use crate::catalog::AdvisorContent;
use crate::documents::{DocumentKind, DraftProfile};

pub fn render(
    kind: DocumentKind,
    country: &str,
    profile: &DraftProfile,
    advisor: &AdvisorContent,
) -> String {
    match kind {
        DocumentKind::StatementOfPurpose => statement_of_purpose(country, profile, advisor),
        DocumentKind::CoverLetter => cover_letter(country, profile),
    }
}

fn destination_pitch(country: &str, advisor: &AdvisorContent) -> String {
    advisor
        .destination(country)
        .map(|d| d.pitch.clone())
        .unwrap_or_else(|| {
            format!(
                "{country} offers exceptional opportunities for professionals in my field, \
                 with a strong economy and welcoming environment for skilled workers."
            )
        })
}

fn offer_paragraph(country: &str, has_job_offer: bool) -> String {
    if has_job_offer {
        format!(
            "I am pleased to confirm that I have secured a position with a reputable \
             organization in {country}. This opportunity aligns perfectly with my career goals \
             and will allow me to apply my skills while contributing to the local economy."
        )
    } else {
        format!(
            "I am actively seeking opportunities that will allow me to contribute my skills \
             and experience to organizations in {country}. I am prepared to integrate into the \
             professional community and add value from day one."
        )
    }
}

fn statement_of_purpose(country: &str, profile: &DraftProfile, advisor: &AdvisorContent) -> String {
    let degree = profile.degree();
    let years = profile.years();
    let skills = profile.headline_skills();
    let pitch = destination_pitch(country, advisor);
    let offer = offer_paragraph(country, profile.has_job_offer());

    format!(
        "Statement of Purpose

I am writing to express my sincere interest in obtaining a visa to {country} to pursue my professional career and contribute meaningfully to its economy. With {years} years of experience in my field and a {degree} degree, I am confident in my ability to make valuable contributions while respecting all immigration regulations.

Professional Background

Throughout my career, I have developed expertise in {skills}. These skills have enabled me to successfully complete complex projects, lead teams, and deliver measurable results for my employers. My professional journey has been marked by continuous learning and a commitment to excellence that I am eager to bring to {country}.

My {degree} education provided me with a strong theoretical foundation, which I have since complemented with practical experience across various projects and industries. I have consistently demonstrated the ability to adapt to new technologies and methodologies, making me well-suited for the dynamic professional environment in {country}.

Why {country}

{pitch}

{offer}

Commitment to Compliance

I fully understand and commit to abiding by all visa regulations and conditions. I have thoroughly researched the requirements and am prepared to fulfill all obligations associated with my visa category. I intend to be a productive member of society, contributing both professionally and personally to my new community.

I am committed to maintaining valid documentation, respecting the terms of my stay, and conducting myself in accordance with all applicable laws and regulations. Should circumstances change, I will promptly notify the relevant authorities as required.

Future Goals

My goal is to establish a successful career in {country}, contributing to its continued growth while developing my professional capabilities. I see this opportunity as the beginning of a long-term commitment to {country}'s professional landscape, where I can grow alongside the local community and economy.

I am genuinely excited about the prospect of building my career in {country} and am confident that my skills, experience, and dedication will enable me to make meaningful contributions. I respectfully request favorable consideration of my visa application.

Thank you for considering my application."
    )
}

fn cover_letter(country: &str, profile: &DraftProfile) -> String {
    let degree = profile.degree();
    let years = profile.years();

    format!(
        "Cover Letter

Dear Visa Officer,

I am writing to submit my visa application for {country}. I respectfully request your consideration of my application.

I hold a {degree} degree and have accumulated {years} years of professional experience in my field. Throughout my career, I have developed strong technical and interpersonal skills that I believe will enable me to contribute positively to {country}'s economy.

All supporting documents are enclosed with this application. I have carefully reviewed the visa requirements and confirm that I meet all eligibility criteria. I am committed to complying with all visa conditions and regulations.

Should you require any additional information or documentation, please do not hesitate to contact me. I am available for an interview at your convenience.

Thank you for your time and consideration.

Sincerely,
[Applicant Name]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn advisor() -> AdvisorContent {
        Catalog::builtin().unwrap().advisor
    }

    #[test]
    fn test_sop_uses_defaults_and_destination_pitch() {
        let text = render(
            DocumentKind::StatementOfPurpose,
            "Canada",
            &DraftProfile {
                years_experience: Some(0),
                ..DraftProfile::default()
            },
            &advisor(),
        );
        assert!(text.starts_with("Statement of Purpose"));
        assert!(text.contains("With 3 years of experience in my field and a Bachelor's degree"));
        assert!(text.contains("expertise in software development, project management"));
        assert!(text.contains("Canada's welcoming multicultural society"));
        assert!(text.contains("I am actively seeking opportunities"));
    }

    #[test]
    fn test_sop_job_offer_paragraph() {
        let profile = DraftProfile {
            has_job_offer: Some(true),
            skills: Some(vec!["Rust".into(), "Kubernetes".into()]),
            ..DraftProfile::default()
        };
        let text = render(DocumentKind::StatementOfPurpose, "Germany", &profile, &advisor());
        assert!(text.contains("secured a position with a reputable organization in Germany"));
        assert!(text.contains("expertise in Rust, Kubernetes."));
    }

    #[test]
    fn test_unknown_destination_gets_generic_pitch() {
        let text = render(
            DocumentKind::StatementOfPurpose,
            "Portugal",
            &DraftProfile::default(),
            &advisor(),
        );
        assert!(text.contains("Portugal offers exceptional opportunities"));
    }

    #[test]
    fn test_cover_letter() {
        let profile = DraftProfile {
            degree_level: Some("Master's".into()),
            years_experience: Some(7),
            ..DraftProfile::default()
        };
        let text = render(DocumentKind::CoverLetter, "Singapore", &profile, &advisor());
        assert!(text.starts_with("Cover Letter"));
        assert!(text.contains("I hold a Master's degree and have accumulated 7 years"));
        assert!(text.ends_with("[Applicant Name]"));
    }
}
