//! Redaction of identifying text in free-form fields.
//!
//! Three patterns are replaced, always in this order:
//!
//! 1. email addresses become `[redacted-email]`,
//! 2. `http://` and `https://` links become `[redacted-url]`,
//! 3. North American style phone numbers become `[redacted-phone]`.
//!
//! The result is then trimmed. None of the markers can be matched by any of
//! the patterns, so sanitizing already sanitized text returns it unchanged.
//!
//! This is a heuristic. It catches the common shapes of these identifiers and
//! nothing else: names, street addresses, student numbers, phone numbers
//! written as `(555) 123-4567` and links without a scheme all pass through
//! untouched. Do not treat sanitized text as free of personal data.
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Replacement for email addresses.
pub const EMAIL_MARKER: &str = "[redacted-email]";
/// Replacement for links.
pub const URL_MARKER: &str = "[redacted-url]";
/// Replacement for phone numbers.
pub const PHONE_MARKER: &str = "[redacted-phone]";

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,}").unwrap());
#[allow(clippy::unwrap_used)]
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());
// Optional country code, then 3-3-4 digits with optional `-`, `.` or whitespace separators.
#[allow(clippy::unwrap_used)]
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[-.\s]?)?[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

/// Redact emails, links and phone numbers from `text`, then trim it.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let text = EMAIL.replace_all(text, NoExpand(EMAIL_MARKER));
    let text = URL.replace_all(&text, NoExpand(URL_MARKER));
    let text = PHONE.replace_all(&text, NoExpand(PHONE_MARKER));
    text.trim().to_owned()
}

/// Same as [`sanitize_text`], with an absent value treated as empty.
#[must_use]
pub fn sanitize_optional(text: Option<&str>) -> String {
    text.map(sanitize_text).unwrap_or_default()
}

/// Keep at most `max` characters of `text`.
///
/// Counts `char`s, so a multi-byte character is never split.
#[must_use]
pub fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
