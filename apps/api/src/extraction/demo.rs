use crate::extraction::fields::{
    DocumentType, ExtractedFields, COMPANY, COUNTRY, DATE_OF_BIRTH, DOCUMENT_NUMBER, NAME, ROLE,
    SKILLS, STATUS,
};

/// Sample fields returned when OCR is unavailable or reads almost nothing.
pub fn demo_fields(document_type: DocumentType) -> ExtractedFields {
    let mut fields = ExtractedFields::new();
    match document_type {
        DocumentType::Passport => {
            fields.set_text(NAME, "Alex Johnson");
            fields.set_text(COUNTRY, "United States");
            fields.set_text(DOCUMENT_NUMBER, "X12345678");
            fields.set_text(DATE_OF_BIRTH, "1990-05-15");
        }
        DocumentType::Work => {
            fields.set_text(NAME, "Alex Johnson");
            fields.set_text(ROLE, "Senior Software Engineer");
            fields.set_text(COMPANY, "Tech Corp Inc.");
            fields.set_list(
                SKILLS,
                vec![
                    "JavaScript".to_string(),
                    "Python".to_string(),
                    "React".to_string(),
                ],
            );
        }
        DocumentType::Other => fields.set_text(STATUS, "Document processed"),
    }
    fields
}
