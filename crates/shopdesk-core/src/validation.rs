//! Client-side form validation
//!
//! Validation runs before any network call. A failure becomes an inline
//! [`Error::Validation`] shown under the form until the next edit.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Credentials;

/// Message shown when email or password is left blank.
pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields.";

/// Message shown when the email does not look like `local@domain.tld`.
pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";

/// `local@domain.tld`: letters, digits and `._%+-` before the `@`, letters,
/// digits, `.` and `-` after it, and an alphabetic TLD of two or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email regex")
});

/// Check that `email` matches the simple `local@domain.tld` pattern.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the login form and build the request body.
///
/// Empty fields are reported before the email pattern, matching the order the
/// user would fix them in.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials> {
    if email.is_empty() || password.is_empty() {
        return Err(Error::validation(MSG_REQUIRED_FIELDS));
    }

    if !validate_email(email) {
        return Err(Error::validation(MSG_INVALID_EMAIL));
    }

    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_well_formed() {
        for email in [
            "a@x.com",
            "first.last@example.co.uk",
            "user+tag@sub-domain.io",
            "UPPER_case%1@host.ORG",
            "0@1.ab",
        ] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_validate_email_rejects_missing_at() {
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_email_rejects_short_or_numeric_tld() {
        assert!(!validate_email("a@x.c"));
        assert!(!validate_email("a@x"));
        assert!(!validate_email("a@x.c0m"));
        assert!(!validate_email("a@x.12"));
    }

    #[test]
    fn test_validate_email_rejects_disallowed_characters() {
        assert!(!validate_email("a b@x.com"));
        assert!(!validate_email("a@x_y.com"));
        assert!(!validate_email("a@@x.com"));
        assert!(!validate_email("a@x.com "));
    }

    #[test]
    fn test_validate_login_requires_both_fields() {
        let err = validate_login("", "secret").unwrap_err();
        assert_eq!(err.to_string(), MSG_REQUIRED_FIELDS);

        let err = validate_login("a@x.com", "").unwrap_err();
        assert_eq!(err.to_string(), MSG_REQUIRED_FIELDS);
    }

    #[test]
    fn test_validate_login_checks_email_after_presence() {
        let err = validate_login("not-an-email", "secret").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.to_string(), MSG_INVALID_EMAIL);
    }

    #[test]
    fn test_validate_login_builds_credentials() {
        let creds = validate_login("a@x.com", "secret").unwrap();
        assert_eq!(creds.email, "a@x.com");
        assert_eq!(creds.password, "secret");
    }
}
