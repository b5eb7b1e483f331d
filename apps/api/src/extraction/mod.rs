// Heuristic document field extraction.
// Turns OCR text into named profile fields with regexes and line heuristics.
// Best effort: a pattern that finds nothing just leaves its key out.

pub mod demo;
pub mod fields;
pub mod handlers;
pub mod identity;
pub mod patterns;
pub mod resume;

use tracing::debug;

use crate::catalog::ExtractionRules;
use crate::extraction::fields::{
    DocumentType, ExtractedFields, DOCUMENT_TYPE, EMAIL, GITHUB, LINKEDIN, LOCATION, PHONE,
};

/// Raw text plus the views every heuristic works from.
pub struct DocumentText<'a> {
    pub raw: &'a str,
    pub lower: String,
    /// Non-empty lines, trimmed, in document order.
    pub lines: Vec<&'a str>,
}

impl<'a> DocumentText<'a> {
    pub fn new(raw: &'a str) -> Self {
        let lines = raw
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self {
            raw,
            lower: raw.to_lowercase(),
            lines,
        }
    }
}

pub(crate) fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Extracts whatever fields the text yields. `document_type` selects the
/// mode and is echoed back under `_documentType`.
pub fn extract(raw_text: &str, document_type: &str, rules: &ExtractionRules) -> ExtractedFields {
    let doc = DocumentText::new(raw_text);
    let mode = DocumentType::from_label(document_type);
    let mut out = ExtractedFields::new();

    if mode == DocumentType::Passport {
        identity::extract_into(&doc, rules, &mut out);
    }

    let common = [
        (EMAIL, patterns::email(raw_text)),
        (PHONE, patterns::phone(raw_text)),
        (LINKEDIN, patterns::linkedin(raw_text)),
        (GITHUB, patterns::github(raw_text)),
        (LOCATION, patterns::location(raw_text)),
    ];
    for (key, value) in common {
        if let Some(value) = value {
            out.set_text(key, value);
        }
    }

    if mode == DocumentType::Work {
        resume::extract_into(&doc, rules, &mut out);
    }

    out.set_text(DOCUMENT_TYPE, document_type);

    debug!(
        "Extracted {} fields from {} lines ({:?})",
        out.len() - 1,
        doc.lines.len(),
        mode
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::extraction::fields::*;

    const RESUME: &str = "John Carter\n\
        Senior Software Engineer\n\
        john.carter@example.com | linkedin.com/in/johncarter | github.com/jcarter\n\
        Skills: Rust, Python, Docker, Kubernetes, PostgreSQL\n\
        5+ years building distributed systems\n\
        Austin, TX 78701";

    const ID_CARD: &str = "GOVERNMENT OF INDIA\n\
        Priya Sharma\n\
        DOB: 15/08/1990\n\
        FEMALE\n\
        1234 5678 9012";

    fn rules() -> ExtractionRules {
        Catalog::builtin().unwrap().extraction
    }

    #[test]
    fn test_resume_end_to_end() {
        let fields = extract(RESUME, "work", &rules());

        assert_eq!(fields.text(NAME), Some("John Carter"));
        assert_eq!(fields.text(EMAIL), Some("john.carter@example.com"));
        assert_eq!(fields.text(LINKEDIN), Some("linkedin.com/in/johncarter"));
        assert_eq!(fields.text(GITHUB), Some("github.com/jcarter"));
        assert_eq!(fields.text(LOCATION), Some("Austin, TX 78701"));
        assert_eq!(fields.text(ROLE), Some("Software Engineer"));
        assert_eq!(fields.text(EXPERIENCE), Some("5 years"));
        assert_eq!(
            fields.list(SKILLS).unwrap(),
            ["Python", "Rust", "Postgresql", "Docker", "Kubernetes", "Git"]
        );
        assert!(!fields.contains(PHONE));
        assert!(!fields.contains(GENDER));
        assert_eq!(fields.text(DOCUMENT_TYPE), Some("work"));
    }

    #[test]
    fn test_resume_key_order() {
        let fields = extract(RESUME, "work", &rules());
        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(
            keys,
            [
                EMAIL,
                LINKEDIN,
                GITHUB,
                LOCATION,
                NAME,
                SKILLS,
                ROLE,
                EXPERIENCE,
                DOCUMENT_TYPE
            ]
        );
    }

    #[test]
    fn test_identity_card_end_to_end() {
        let fields = extract(ID_CARD, "passport", &rules());

        assert_eq!(fields.text(NAME), Some("Priya Sharma"));
        assert_eq!(fields.text(DATE_OF_BIRTH), Some("15/08/1990"));
        assert_eq!(fields.text(GENDER), Some("Female"));
        assert_eq!(fields.text(DOCUMENT_NUMBER), Some("1234 5678 9012"));
        assert_eq!(fields.text(COUNTRY), Some("India"));
        // The loose phone pattern also picks up grouped ID digits.
        assert_eq!(fields.text(PHONE), Some("1234 5678"));
        assert!(!fields.contains(SKILLS));

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(
            keys,
            [
                NAME,
                DATE_OF_BIRTH,
                GENDER,
                DOCUMENT_NUMBER,
                COUNTRY,
                PHONE,
                DOCUMENT_TYPE
            ]
        );
    }

    #[test]
    fn test_other_documents_only_get_common_fields() {
        let fields = extract(
            "Bank statement for jane@example.com\nMALE\n5 years",
            "bank",
            &rules(),
        );
        assert_eq!(fields.text(EMAIL), Some("jane@example.com"));
        assert!(!fields.contains(GENDER));
        assert!(!fields.contains(EXPERIENCE));
        assert_eq!(fields.text(DOCUMENT_TYPE), Some("bank"));
    }

    #[test]
    fn test_empty_text_yields_only_the_type_marker() {
        let fields = extract("", "passport", &rules());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.text(DOCUMENT_TYPE), Some("passport"));
    }

    #[test]
    fn test_crlf_lines_are_split() {
        let doc = DocumentText::new("  Ana Silva \r\n\r\nPassport\r");
        assert_eq!(doc.lines, vec!["Ana Silva", "Passport"]);
    }
}
