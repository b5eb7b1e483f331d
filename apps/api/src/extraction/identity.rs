//! Identity-document heuristics (passports, national ID cards).

use crate::catalog::ExtractionRules;
use crate::extraction::fields::{
    ExtractedFields, COUNTRY, DATE_OF_BIRTH, DOCUMENT_NUMBER, GENDER, NAME,
};
use crate::extraction::patterns;
use crate::extraction::{starts_with_digit, DocumentText};

const MIN_NAME_CHARS: usize = 3;
const MAX_NAME_CHARS: usize = 40;

pub fn extract_into(doc: &DocumentText<'_>, rules: &ExtractionRules, out: &mut ExtractedFields) {
    if let Some(name) = doc.lines.iter().find(|line| is_name_candidate(line, rules)) {
        out.set_text(NAME, *name);
    }

    let dob = patterns::marked_date_of_birth(doc.raw)
        .or_else(|| patterns::dates(doc.raw).into_iter().next());
    if let Some(dob) = dob {
        out.set_text(DATE_OF_BIRTH, dob);
    }

    if let Some(gender) = gender(&doc.lower) {
        out.set_text(GENDER, gender);
    }

    if let Some(number) = patterns::national_id(doc.raw) {
        out.set_text(DOCUMENT_NUMBER, number);
    }

    if let Some(country) = issuing_country(&doc.lower, rules) {
        out.set_text(COUNTRY, country);
    }
}

/// First line that is not an institutional header, a number, an address or a date.
fn is_name_candidate(line: &str, rules: &ExtractionRules) -> bool {
    let lower = line.to_lowercase();
    if rules.name_stop_words.iter().any(|w| lower.contains(w.as_str())) {
        return false;
    }
    if starts_with_digit(line) {
        return false;
    }
    let chars = line.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&chars) {
        return false;
    }
    if line.contains('@') {
        return false;
    }
    !(line.contains('/') && line.chars().any(|c| c.is_ascii_digit()))
}

/// "female" contains "male", so it has to be checked first.
fn gender(lower: &str) -> Option<&'static str> {
    if lower.contains("female") {
        Some("Female")
    } else if lower.contains("male") {
        Some("Male")
    } else {
        None
    }
}

/// First configured country whose name appears anywhere in the text.
fn issuing_country<'r>(lower: &str, rules: &'r ExtractionRules) -> Option<&'r str> {
    rules
        .issuing_countries
        .iter()
        .find(|country| lower.contains(&country.to_lowercase()))
        .map(String::as_str)
}
