//! Email and phone extraction from free-form text

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contacts found in a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Email addresses, as written in the source
    pub emails: Vec<String>,

    /// Phone numbers, reduced to their digit groups
    pub phones: Vec<String>,
}

// Regex patterns
static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// Groups: country, area, exchange, subscriber
static PHONE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\b(?:\+?(\d{1,3}))?[-.\s]?\(?(?:(\d{3})\)?[-.\s]?)?(\d{3})[-.\s]?(\d{4})\b")
        .unwrap()
});

/// Compile the extraction patterns now rather than on first use.
pub fn warm_up() {
    std::sync::LazyLock::force(&EMAIL_REGEX);
    std::sync::LazyLock::force(&PHONE_REGEX);
}

/// Extract all emails and phone numbers from `text`.
///
/// Shorthand for [`ExtractionResult::extract`].
#[must_use]
pub fn extract(text: &str) -> ExtractionResult {
    ExtractionResult::extract(text)
}

impl ExtractionResult {
    /// Extract all emails and phone numbers from text content
    ///
    /// Matches are returned left to right. Duplicates are kept.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let emails: Vec<String> = EMAIL_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        let phones: Vec<String> = PHONE_REGEX
            .captures_iter(text)
            .map(|cap| join_phone_groups(&cap))
            .collect();

        debug!(
            emails = emails.len(),
            phones = phones.len(),
            input_bytes = text.len(),
            "Extracted contacts"
        );

        Self { emails, phones }
    }

    /// Check if nothing was extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }

    /// Get count of all extracted entries
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.emails.len() + self.phones.len()
    }
}

/// Concatenate the groups that took part in a phone match, skipping the rest.
fn join_phone_groups(cap: &Captures<'_>) -> String {
    cap.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .collect()
}
