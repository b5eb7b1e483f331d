//! Cross-cutting patterns run against every document regardless of type.
//! Each one reports its first (leftmost) match only.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+").expect("valid regex")
});

// Loose on purpose: grouped digit runs such as ID numbers can match too.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\+?[0-9]{1,2}[-\s]?[0-9]{10}|\+?\(?[0-9]{1,3}\)?[-\s.]?[0-9]{3,4}[-\s.]?[0-9]{3,4}",
    )
    .expect("valid regex")
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+").expect("valid regex"));

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[A-Za-z0-9_-]+").expect("valid regex"));

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{2,4}").expect("valid regex")
});

static MARKED_DOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)DOB\s*[:\-]?\s*([0-9]{1,2}[/\-.][0-9]{1,2}[/\-.][0-9]{2,4})")
        .expect("valid regex")
});

// Three groups of four digits, e.g. a national ID number.
static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}\s*[0-9]{4}\s*[0-9]{4}").expect("valid regex"));

// "City, ST 12345" or "City, S.T. - 123456"
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]+),?\s*([A-Z]\.?[A-Z]\.?)\s*[-–]?\s*[0-9]{5,6}").expect("valid regex")
});

static EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs?)").expect("valid regex"));

fn first_match<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.find(text).map(|m| m.as_str())
}

pub fn email(text: &str) -> Option<&str> {
    first_match(&EMAIL_RE, text)
}

pub fn phone(text: &str) -> Option<&str> {
    first_match(&PHONE_RE, text)
}

pub fn linkedin(text: &str) -> Option<&str> {
    first_match(&LINKEDIN_RE, text)
}

pub fn github(text: &str) -> Option<&str> {
    first_match(&GITHUB_RE, text)
}

pub fn location(text: &str) -> Option<&str> {
    first_match(&LOCATION_RE, text)
}

pub fn national_id(text: &str) -> Option<&str> {
    first_match(&NATIONAL_ID_RE, text)
}

/// Every date-shaped token, in text order.
pub fn dates(text: &str) -> Vec<&str> {
    DATE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// The date following an explicit "DOB" marker.
pub fn marked_date_of_birth(text: &str) -> Option<&str> {
    MARKED_DOB_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Leading number of the first "N years" / "N+ yrs" mention.
pub fn experience_years(text: &str) -> Option<&str> {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
