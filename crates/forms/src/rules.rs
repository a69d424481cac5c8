//! Field validation rules
//!
//! Mirrors the contact form's inline validation: a required check first,
//! then the per-field rule. Each failure carries the message shown next to
//! the field.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Minimum digits (after stripping separators) for a phone number.
const PHONE_MIN_DIGITS: usize = 10;

/// The fields a contact form carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Message,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Company => "company",
            FieldName::Message => "message",
        };
        f.write_str(name)
    }
}

/// A single field's validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldName, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex compiles"))
}

/// Whether `email` looks like an address (local@domain.tld)
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Whether `phone` is a plausible number once spaces, dashes, and
/// parentheses are stripped
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    phone_regex().is_match(&cleaned) && cleaned.len() >= PHONE_MIN_DIGITS
}

/// Validate one field's trimmed value.
///
/// `required` controls whether an empty value fails; optional fields are
/// only checked when non-empty.
pub fn validate_field(field: FieldName, value: &str, required: bool) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        if required {
            return Err(FieldError::new(field, "This field is required"));
        }
        return Ok(());
    }

    match field {
        FieldName::Email => {
            if !is_valid_email(value) {
                return Err(FieldError::new(
                    field,
                    "Please enter a valid email address",
                ));
            }
        }
        FieldName::Phone => {
            if !is_valid_phone(value) {
                return Err(FieldError::new(field, "Please enter a valid phone number"));
            }
        }
        FieldName::FirstName | FieldName::LastName => {
            if value.chars().count() < 2 {
                return Err(FieldError::new(
                    field,
                    "Name must be at least 2 characters long",
                ));
            }
        }
        FieldName::Company => {
            if value.chars().count() < 2 {
                return Err(FieldError::new(
                    field,
                    "Company name must be at least 2 characters long",
                ));
            }
        }
        FieldName::Message => {
            if value.chars().count() < 10 {
                return Err(FieldError::new(
                    field,
                    "Message must be at least 10 characters long",
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_phone_accepts_separators() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
    }

    #[test]
    fn test_phone_rejects_short_or_leading_zero() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0551234567"));
        assert!(!is_valid_phone("555-abc-1234"));
    }

    #[test]
    fn test_required_empty_field() {
        let err = validate_field(FieldName::Email, "  ", true).unwrap_err();
        assert_eq!(err.message, "This field is required");
        assert_eq!(err.field, FieldName::Email);
    }

    #[test]
    fn test_optional_empty_field_passes() {
        assert!(validate_field(FieldName::Phone, "", false).is_ok());
    }

    #[test]
    fn test_name_minimum_length() {
        let err = validate_field(FieldName::FirstName, "A", true).unwrap_err();
        assert_eq!(err.message, "Name must be at least 2 characters long");
        assert!(validate_field(FieldName::FirstName, "Al", true).is_ok());
    }

    #[test]
    fn test_company_minimum_length() {
        let err = validate_field(FieldName::Company, "X", false).unwrap_err();
        assert_eq!(err.message, "Company name must be at least 2 characters long");
    }

    #[test]
    fn test_message_minimum_length() {
        let err = validate_field(FieldName::Message, "too short", true).unwrap_err();
        assert_eq!(err.message, "Message must be at least 10 characters long");
        assert!(validate_field(FieldName::Message, "long enough now", true).is_ok());
    }

    #[test]
    fn test_values_are_trimmed_before_checks() {
        assert!(validate_field(FieldName::FirstName, "  Al  ", true).is_ok());
    }
}
