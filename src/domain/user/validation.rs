//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::settings::UserSettings;
use crate::domain::DomainError;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email '{0}' is not a valid address")]
    InvalidEmailFormat(String),

    #[error("Email domain '{domain}' is not allowed. Allowed domains: {allowed}")]
    EmailDomainNotAllowed { domain: String, allowed: String },

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("First name must be at least {0} characters")]
    FirstNameTooShort(usize),

    #[error("First name cannot exceed {0} characters")]
    FirstNameTooLong(usize),

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Last name must be at least {0} characters")]
    LastNameTooShort(usize),

    #[error("Last name cannot exceed {0} characters")]
    LastNameTooLong(usize),
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate an email address against format rules and the domain allow-list
pub fn validate_email(email: &str, settings: &UserSettings) -> Result<(), UserValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmailFormat(email.to_string()));
    }

    let allowed = settings.allowed_domains();

    if !allowed.is_empty() {
        let domain = email_domain(email);

        if !allowed.iter().any(|d| *d == domain) {
            return Err(UserValidationError::EmailDomainNotAllowed {
                domain,
                allowed: allowed.join(", "),
            });
        }
    }

    Ok(())
}

/// Validate a first name against the configured length bounds
pub fn validate_first_name(name: &str, settings: &UserSettings) -> Result<(), UserValidationError> {
    let length = name.trim().chars().count();

    if length == 0 {
        return Err(UserValidationError::EmptyFirstName);
    }

    if length < settings.min_first_name_length {
        return Err(UserValidationError::FirstNameTooShort(
            settings.min_first_name_length,
        ));
    }

    if length > settings.max_first_name_length {
        return Err(UserValidationError::FirstNameTooLong(
            settings.max_first_name_length,
        ));
    }

    Ok(())
}

/// Validate a last name against the configured length bounds
pub fn validate_last_name(name: &str, settings: &UserSettings) -> Result<(), UserValidationError> {
    let length = name.trim().chars().count();

    if length == 0 {
        return Err(UserValidationError::EmptyLastName);
    }

    if length < settings.min_last_name_length {
        return Err(UserValidationError::LastNameTooShort(
            settings.min_last_name_length,
        ));
    }

    if length > settings.max_last_name_length {
        return Err(UserValidationError::LastNameTooLong(
            settings.max_last_name_length,
        ));
    }

    Ok(())
}

/// Lowercased domain part of an already validated address
fn email_domain(email: &str) -> String {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let settings = UserSettings::default();
        assert!(validate_email("john@example.com", &settings).is_ok());
        assert!(validate_email("a.b+tag@sub.example.org", &settings).is_ok());
        assert!(validate_email("  padded@example.com  ", &settings).is_ok());
    }

    #[test]
    fn test_empty_email() {
        let settings = UserSettings::default();
        assert_eq!(
            validate_email("", &settings),
            Err(UserValidationError::EmptyEmail)
        );
        assert_eq!(
            validate_email("   ", &settings),
            Err(UserValidationError::EmptyEmail)
        );
    }

    #[test]
    fn test_malformed_email() {
        let settings = UserSettings::default();
        assert!(matches!(
            validate_email("not-an-email", &settings),
            Err(UserValidationError::InvalidEmailFormat(_))
        ));
        assert!(matches!(
            validate_email("user@localhost", &settings),
            Err(UserValidationError::InvalidEmailFormat(_))
        ));
    }

    #[test]
    fn test_email_too_long() {
        let settings = UserSettings::default();
        let email = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            validate_email(&email, &settings),
            Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH))
        );
    }

    #[test]
    fn test_domain_allow_list() {
        let settings = UserSettings::default().with_allowed_email_domains("example.com,corp.io");

        assert!(validate_email("x@example.com", &settings).is_ok());
        assert!(validate_email("x@CORP.IO", &settings).is_ok());

        let err = validate_email("x@other.net", &settings).unwrap_err();
        assert_eq!(
            err,
            UserValidationError::EmailDomainNotAllowed {
                domain: "other.net".to_string(),
                allowed: "example.com, corp.io".to_string(),
            }
        );
    }

    #[test]
    fn test_first_name_bounds() {
        let settings = UserSettings::default().with_first_name_bounds(3, 5);

        assert!(validate_first_name("John", &settings).is_ok());
        assert_eq!(
            validate_first_name("Jo", &settings),
            Err(UserValidationError::FirstNameTooShort(3))
        );
        assert_eq!(
            validate_first_name("Johnny", &settings),
            Err(UserValidationError::FirstNameTooLong(5))
        );
        assert_eq!(
            validate_first_name("  ", &settings),
            Err(UserValidationError::EmptyFirstName)
        );
    }

    #[test]
    fn test_first_name_counts_characters_not_bytes() {
        let settings = UserSettings::default().with_first_name_bounds(1, 4);
        assert!(validate_first_name("Zoë", &settings).is_ok());
    }

    #[test]
    fn test_last_name_bounds() {
        let settings = UserSettings::default().with_last_name_bounds(2, 4);

        assert!(validate_last_name("Doe", &settings).is_ok());
        assert_eq!(
            validate_last_name("D", &settings),
            Err(UserValidationError::LastNameTooShort(2))
        );
        assert_eq!(
            validate_last_name("Doeson", &settings),
            Err(UserValidationError::LastNameTooLong(4))
        );
        assert_eq!(
            validate_last_name("", &settings),
            Err(UserValidationError::EmptyLastName)
        );
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: DomainError = UserValidationError::FirstNameTooShort(3).into();
        assert_eq!(
            err,
            DomainError::validation("First name must be at least 3 characters")
        );
    }

    #[test]
    fn test_too_short_message_mentions_minimum() {
        let err = UserValidationError::FirstNameTooShort(3);
        assert_eq!(err.to_string(), "First name must be at least 3 characters");
    }
}
