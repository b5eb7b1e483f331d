// Relocation advisor chat.
// Generator first; canned per-country replies chosen by keyword topic otherwise.

pub mod handlers;

use crate::catalog::advisor::DEFAULT_TOPIC;
use crate::catalog::AdvisorContent;

/// First topic (in catalog order) with a keyword contained in the message.
pub fn detect_topic<'a>(message: &str, advisor: &'a AdvisorContent) -> &'a str {
    let lower = message.to_lowercase();
    advisor
        .topics
        .iter()
        .find(|t| t.keywords.iter().any(|k| lower.contains(k.as_str())))
        .map(|t| t.topic.as_str())
        .unwrap_or(DEFAULT_TOPIC)
}

/// Canned reply for `country` (unknown or missing → the default country).
pub fn canned_reply<'a>(
    message: &str,
    country: Option<&str>,
    advisor: &'a AdvisorContent,
) -> &'a str {
    let destination = country
        .and_then(|c| advisor.destination(c))
        .or_else(|| advisor.destination(&advisor.default_country));

    let Some(destination) = destination else {
        return "";
    };

    let topic = detect_topic(message, advisor);
    destination
        .replies
        .get(topic)
        .or_else(|| destination.replies.get(DEFAULT_TOPIC))
        .map(String::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn advisor() -> AdvisorContent {
        Catalog::builtin().unwrap().advisor
    }

    #[test]
    fn test_topic_priority() {
        let advisor = advisor();
        // "work" and "rent" both match; phrase outranks both.
        assert_eq!(detect_topic("How do I say rent at work?", &advisor), "phrase");
        assert_eq!(detect_topic("Renting near the office", &advisor), "workplace");
        assert_eq!(detect_topic("Finding an APARTMENT", &advisor), "housing");
        assert_eq!(detect_topic("Do I need a doctor?", &advisor), "healthcare");
        assert_eq!(detect_topic("Blue card permit", &advisor), "visa");
        assert_eq!(detect_topic("hello", &advisor), "default");
    }

    #[test]
    fn test_unknown_country_falls_back_to_default() {
        let advisor = advisor();
        let germany = canned_reply("hello", Some("Germany"), &advisor);
        assert_eq!(canned_reply("hello", Some("Atlantis"), &advisor), germany);
        assert_eq!(canned_reply("hello", None, &advisor), germany);
    }

    #[test]
    fn test_country_lookup_is_case_insensitive() {
        let advisor = advisor();
        assert_eq!(
            canned_reply("visa?", Some("canada"), &advisor),
            canned_reply("visa?", Some("Canada"), &advisor)
        );
        assert_ne!(
            canned_reply("visa?", Some("Canada"), &advisor),
            canned_reply("visa?", Some("Germany"), &advisor)
        );
    }
}
