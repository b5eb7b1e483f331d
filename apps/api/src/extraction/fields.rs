use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "Name";
pub const DATE_OF_BIRTH: &str = "Date of Birth";
pub const GENDER: &str = "Gender";
pub const DOCUMENT_NUMBER: &str = "Document Number";
pub const COUNTRY: &str = "Country";
pub const EMAIL: &str = "Email";
pub const PHONE: &str = "Phone";
pub const LINKEDIN: &str = "LinkedIn";
pub const GITHUB: &str = "GitHub";
pub const LOCATION: &str = "Location";
pub const SKILLS: &str = "Skills";
pub const ROLE: &str = "Role";
pub const EXPERIENCE: &str = "Experience";
pub const COMPANY: &str = "Company";
pub const STATUS: &str = "Status";
/// Records which extraction mode ran.
pub const DOCUMENT_TYPE: &str = "_documentType";

/// Which heuristics the extractor applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    /// Identity documents: passports, national ID cards.
    Passport,
    /// Resumes and other work documents.
    Work,
    Other,
}

impl DocumentType {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "passport" => DocumentType::Passport,
            "work" => DocumentType::Work,
            _ => DocumentType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// Field name → value, in the order the fields were found. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(IndexMap<String, FieldValue>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_list(&mut self, key: &str, values: Vec<String>) {
        self.0.insert(key.to_string(), FieldValue::List(values));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl ExtractedFields {
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            FieldValue::Text(value) => Some(value.as_str()),
            FieldValue::List(_) => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.0.get(key)? {
            FieldValue::List(values) => Some(values.as_slice()),
            FieldValue::Text(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut fields = ExtractedFields::new();
        fields.set_text(NAME, "Ada");
        fields.set_list(SKILLS, vec!["Rust".to_string()]);
        fields.set_text(DOCUMENT_TYPE, "work");

        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"Ada","Skills":["Rust"],"_documentType":"work"}"#
        );
    }

    #[test]
    fn test_document_type_labels() {
        assert_eq!(DocumentType::from_label("passport"), DocumentType::Passport);
        assert_eq!(DocumentType::from_label(" Work "), DocumentType::Work);
        assert_eq!(DocumentType::from_label("visa"), DocumentType::Other);
    }
}
