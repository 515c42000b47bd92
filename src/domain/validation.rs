//! Non-empty credential rule shared by every host.

use std::fmt;

use crate::domain::elements::Field;

/// Trimmed, non-empty username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Why a submission was blocked.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Please enter username and password.")]
    MissingBoth,
    #[error("Please enter username.")]
    MissingUsername,
    #[error("Please enter password.")]
    MissingPassword,
}

impl ValidationFailure {
    /// Failure for the given blank fields, `None` when neither is blank.
    pub fn from_blank(username_blank: bool, password_blank: bool) -> Option<Self> {
        match (username_blank, password_blank) {
            (true, true) => Some(ValidationFailure::MissingBoth),
            (true, false) => Some(ValidationFailure::MissingUsername),
            (false, true) => Some(ValidationFailure::MissingPassword),
            (false, false) => None,
        }
    }

    /// Field that receives focus after the failure is shown.
    pub fn focus(self) -> Field {
        match self {
            ValidationFailure::MissingBoth | ValidationFailure::MissingUsername => {
                Field::Username
            }
            ValidationFailure::MissingPassword => Field::Password,
        }
    }

    /// Fields left blank, in form order.
    pub fn missing_fields(self) -> &'static [Field] {
        match self {
            ValidationFailure::MissingBoth => &[Field::Username, Field::Password],
            ValidationFailure::MissingUsername => &[Field::Username],
            ValidationFailure::MissingPassword => &[Field::Password],
        }
    }

    /// Machine-readable reason used in JSON error details.
    pub fn code(self) -> &'static str {
        match self {
            ValidationFailure::MissingBoth => "missing_username_and_password",
            ValidationFailure::MissingUsername => "missing_username",
            ValidationFailure::MissingPassword => "missing_password",
        }
    }
}

/// Classifies a raw username/password pair.
///
/// Both values are trimmed first (see [`trim`]), so whitespace-only input
/// counts as empty.
/// The combined failure is checked before either single-field failure.
///
/// # Errors
///
/// Returns the [`ValidationFailure`] describing which fields are blank.
pub fn validate(username: &str, password: &str) -> Result<Credentials, ValidationFailure> {
    let username = trim(username);
    let password = trim(password);

    match ValidationFailure::from_blank(username.is_empty(), password.is_empty()) {
        Some(failure) => Err(failure),
        None => Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }),
    }
}

/// Strips whitespace and byte order marks from both ends.
pub fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Whether `value` counts as empty for the login form.
pub fn is_blank(value: &str) -> bool {
    trim(value).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_wins_over_single_field() {
        assert_eq!(validate("", ""), Err(ValidationFailure::MissingBoth));
        assert_eq!(validate(" ", "\t"), Err(ValidationFailure::MissingBoth));
    }

    #[test]
    fn test_single_missing_field() {
        assert_eq!(
            validate("", "secret"),
            Err(ValidationFailure::MissingUsername)
        );
        assert_eq!(
            validate("alice", ""),
            Err(ValidationFailure::MissingPassword)
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(
            validate("   ", "secret"),
            Err(ValidationFailure::MissingUsername)
        );
        assert_eq!(
            validate("alice", " \n "),
            Err(ValidationFailure::MissingPassword)
        );
        assert_eq!(
            validate("\u{FEFF}", "secret"),
            Err(ValidationFailure::MissingUsername)
        );
        assert_eq!(
            validate("alice", " \u{FEFF}\u{00A0}"),
            Err(ValidationFailure::MissingPassword)
        );
    }

    #[test]
    fn test_trim_strips_byte_order_mark() {
        assert_eq!(trim("\u{FEFF} alice \u{FEFF}"), "alice");
        assert!(is_blank("\u{FEFF}"));
        assert!(!is_blank("a"));
    }

    #[test]
    fn test_from_blank() {
        assert_eq!(
            ValidationFailure::from_blank(true, true),
            Some(ValidationFailure::MissingBoth)
        );
        assert_eq!(
            ValidationFailure::from_blank(false, true),
            Some(ValidationFailure::MissingPassword)
        );
        assert_eq!(ValidationFailure::from_blank(false, false), None);
    }

    #[test]
    fn test_valid_credentials_are_trimmed() {
        let credentials = validate("  alice ", " secret\n").unwrap();

        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationFailure::MissingBoth.to_string(),
            "Please enter username and password."
        );
        assert_eq!(
            ValidationFailure::MissingUsername.to_string(),
            "Please enter username."
        );
        assert_eq!(
            ValidationFailure::MissingPassword.to_string(),
            "Please enter password."
        );
    }

    #[test]
    fn test_focus_targets() {
        assert_eq!(ValidationFailure::MissingBoth.focus(), Field::Username);
        assert_eq!(ValidationFailure::MissingUsername.focus(), Field::Username);
        assert_eq!(ValidationFailure::MissingPassword.focus(), Field::Password);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ValidationFailure::MissingBoth.missing_fields(),
            &[Field::Username, Field::Password]
        );
        assert_eq!(
            ValidationFailure::MissingPassword.missing_fields(),
            &[Field::Password]
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = validate("alice", "hunter2").unwrap();
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
