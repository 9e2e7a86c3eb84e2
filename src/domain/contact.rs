// SPDX-License-Identifier: MPL-2.0
//! Contact form payload and the validation shared by form and endpoint.
//!
//! Check order is fixed: required fields, then email shape, then message
//! length. A payload with both a bad email and a short message therefore
//! reports the email.

use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Maximum UTF-16 code units kept per field after sanitizing.
///
/// Lengths are counted the way the browser counts them, so an emoji is two.
pub const MAX_FIELD_UNITS: usize = 1000;

/// Minimum message length, in UTF-16 code units, after trimming.
pub const MIN_MESSAGE_UNITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("literal email pattern"));

/// Wire body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        self.map_fields(|field| field.trim().to_string())
    }

    /// Copy with every field passed through [`sanitize_field`].
    #[must_use]
    pub fn sanitized(&self) -> Self {
        self.map_fields(sanitize_field)
    }

    /// Runs the required / email / length checks in that order.
    ///
    /// Fields are checked as given; callers trim or sanitize first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if utf16_len(&self.message) < MIN_MESSAGE_UNITS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }

    fn map_fields(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            name: f(&self.name),
            email: f(&self.email),
            subject: f(&self.subject),
            message: f(&self.message),
        }
    }
}

/// JSON body of every endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Trims, strips `<` and `>`, and truncates to [`MAX_FIELD_UNITS`].
///
/// A character that would straddle the limit is dropped rather than split.
#[must_use]
pub fn sanitize_field(input: &str) -> String {
    let mut units = 0;
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .take_while(|c| {
            units += c.len_utf16();
            units <= MAX_FIELD_UNITS
        })
        .collect()
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_angle_brackets_and_trims() {
        assert_eq!(sanitize_field("  <b>hi</b>  "), "bhi/b");
    }

    #[test]
    fn sanitize_truncates_long_input() {
        let long = "x".repeat(MAX_FIELD_UNITS + 50);
        assert_eq!(sanitize_field(&long).chars().count(), MAX_FIELD_UNITS);
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_FIELD_UNITS + 1);
        let out = sanitize_field(&long);
        assert_eq!(out.chars().count(), MAX_FIELD_UNITS);
    }

    #[test]
    fn sanitize_counts_astral_characters_twice() {
        let long = "😀".repeat(600);
        let out = sanitize_field(&long);
        assert_eq!(out.chars().count(), 500);
        assert_eq!(utf16_len(&out), MAX_FIELD_UNITS);

        // An odd budget left over is not filled with half an emoji.
        let out = sanitize_field(&format!("x{long}"));
        assert_eq!(utf16_len(&out), MAX_FIELD_UNITS - 1);
        assert!(out.ends_with('😀'));
    }

    #[test]
    fn message_length_uses_utf16_units() {
        let five_emoji = ContactPayload::new("Ada", "ada@example.com", "Hi", "😀".repeat(5));
        assert_eq!(five_emoji.validate(), Ok(()));

        let nine = ContactPayload::new("Ada", "ada@example.com", "Hi", "é".repeat(9));
        assert_eq!(nine.validate(), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn email_is_checked_before_message_length() {
        let payload = ContactPayload::new("A", "bad", "S", "short");
        assert_eq!(payload.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn ten_character_message_is_accepted() {
        let payload = ContactPayload::new("A", "a@b.com", "S", "1234567890");
        assert_eq!(payload.validate(), Ok(()));
    }

    #[test]
    fn nine_character_message_is_rejected() {
        let payload = ContactPayload::new("A", "a@b.com", "S", "123456789");
        assert_eq!(payload.validate(), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn blank_field_counts_as_missing_after_trim() {
        let payload = ContactPayload::new("   ", "a@b.com", "S", "1234567890");
        assert_eq!(
            payload.trimmed().validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn sanitized_message_length_is_measured_after_stripping() {
        let payload = ContactPayload::new("A", "a@b.com", "S", "<<<<1234567>>>");
        assert_eq!(
            payload.sanitized().validate(),
            Err(ValidationError::MessageTooShort)
        );
    }
}
