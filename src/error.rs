// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Delivery(String),
}

/// Reasons a contact submission is rejected before it is sent or processed.
///
/// The same checks run in the browser-side form and in the endpoint, but the
/// two surfaces word their messages differently, hence the two key accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of name, email, subject or message is missing or blank.
    MissingFields,

    /// The email address does not look like `local@domain.tld`.
    InvalidEmail,

    /// The message is shorter than the minimum length after trimming.
    MessageTooShort,
}

impl ValidationError {
    /// Returns the i18n message key shown inline under the contact form.
    pub fn form_key(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "form-fields-required",
            ValidationError::InvalidEmail => "form-invalid-email",
            ValidationError::MessageTooShort => "form-message-too-short",
        }
    }

    /// Returns the i18n message key used in the endpoint's JSON response.
    pub fn api_key(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "api-fields-required",
            ValidationError::InvalidEmail => "api-invalid-email",
            ValidationError::MessageTooShort => "api-message-too-short",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "All fields are required"),
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
            ValidationError::MessageTooShort => write!(f, "Message is too short"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Delivery(e) => write!(f, "Delivery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validation_error_displays_reason() {
        assert_eq!(
            format!("{}", ValidationError::InvalidEmail),
            "Invalid email address"
        );
    }

    #[test]
    fn validation_error_keys_differ_per_surface() {
        assert_eq!(
            ValidationError::MissingFields.form_key(),
            "form-fields-required"
        );
        assert_eq!(
            ValidationError::MissingFields.api_key(),
            "api-fields-required"
        );
        assert_eq!(
            ValidationError::MessageTooShort.api_key(),
            "api-message-too-short"
        );
    }
}
