//! Resume / work-document heuristics.

use crate::catalog::ExtractionRules;
use crate::extraction::fields::{ExtractedFields, EXPERIENCE, NAME, ROLE, SKILLS};
use crate::extraction::patterns;
use crate::extraction::{starts_with_digit, DocumentText};

/// Only the top of a resume is searched for the candidate's name.
const NAME_SCAN_LINES: usize = 3;

pub fn extract_into(doc: &DocumentText<'_>, rules: &ExtractionRules, out: &mut ExtractedFields) {
    if let Some(name) = doc
        .lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find(|line| is_name_candidate(line))
    {
        out.set_text(NAME, *name);
    }

    let skills = skills(&doc.lower, rules);
    if !skills.is_empty() {
        out.set_list(SKILLS, skills);
    }

    // Pattern priority, not position in the text, decides the role.
    if let Some(role) = rules
        .title_patterns
        .iter()
        .find_map(|pattern| pattern.find(doc.raw))
    {
        out.set_text(ROLE, role.as_str());
    }

    if let Some(years) = patterns::experience_years(doc.raw) {
        out.set_text(EXPERIENCE, format!("{years} years"));
    }
}

fn is_name_candidate(line: &str) -> bool {
    let chars = line.chars().count();
    chars > 2
        && chars < 40
        && !line.contains('@')
        && !starts_with_digit(line)
        && !line.to_lowercase().contains("resume")
}

/// Vocabulary order, first letter capitalised.
fn skills(lower: &str, rules: &ExtractionRules) -> Vec<String> {
    rules
        .skill_vocabulary
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .map(|skill| capitalize(skill))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
