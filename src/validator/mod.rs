mod types;

pub use types::EmailError;

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part: dot-separated atoms (no "..", no leading/trailing dot) or a quoted string.
/// Domain: bracketed IPv4 literal, or labels ending with an alphabetic TLD of 2+ letters.
const SYNTAX_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|("[^\n\r\x{2028}\x{2029}]+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

static SYNTAX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SYNTAX_PATTERN).expect("static syntax regex compiles"));

/// Returns `true` when `email` has an acceptable shape.
///
/// Empty and whitespace-only inputs are rejected before the regex runs. The
/// match is done on the lower-cased input; surrounding whitespace is *not*
/// trimmed and makes the address invalid.
pub fn is_valid_syntax(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    SYNTAX_RE.is_match(&email.to_lowercase())
}

/// Lower-cased remainder after the first `@`.
pub fn extract_domain(email: &str) -> Result<String, EmailError> {
    email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .ok_or(EmailError::MissingAt)
}

/// Lower-cased text before the first `@`.
pub fn local_part(email: &str) -> Result<String, EmailError> {
    email
        .split_once('@')
        .map(|(local, _)| local.to_lowercase())
        .ok_or(EmailError::MissingAt)
}
