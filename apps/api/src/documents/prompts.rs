use crate::documents::{DocumentKind, DraftProfile};
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;

const GENERIC_PROFILE_SKILLS: &str = "Various professional skills";

pub fn build_prompt(kind: DocumentKind, country: &str, profile: &DraftProfile) -> String {
    match kind {
        DocumentKind::StatementOfPurpose => sop_prompt(country, profile),
        DocumentKind::CoverLetter => cover_letter_prompt(country, profile),
    }
}

fn sop_prompt(country: &str, profile: &DraftProfile) -> String {
    let skills = profile
        .all_skills()
        .unwrap_or_else(|| GENERIC_PROFILE_SKILLS.to_string());
    let offer = if profile.has_job_offer() { "Yes" } else { "No" };

    format!(
        "Write a professional Statement of Purpose for a visa application to {country}.

The applicant has the following profile:
- Education: {degree} degree
- Years of Experience: {years} years
- Skills: {skills}
- Has job offer: {offer}

Write a compelling, professional Statement of Purpose that:
1. Introduces the applicant and their background
2. Explains their career goals and why {country}
3. Highlights relevant qualifications and experience
4. Shows commitment to following visa regulations
5. Is around 400-500 words

Write in first person, professional tone. {PLAIN_TEXT_INSTRUCTION}",
        degree = profile.degree(),
        years = profile.years(),
    )
}

fn cover_letter_prompt(country: &str, profile: &DraftProfile) -> String {
    format!(
        "Write a professional cover letter for a visa application to {country}.

The applicant has {years} years of experience with a {degree} degree.

Write a concise, professional cover letter that accompanies visa application documents. \
{PLAIN_TEXT_INSTRUCTION}",
        years = profile.years(),
        degree = profile.degree(),
    )
}
