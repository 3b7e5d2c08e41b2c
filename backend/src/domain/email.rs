//! Validated email address value type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// The address was blank.
    #[error("email must not be empty")]
    Empty,
    /// The address exceeded the maximum permitted length.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum permitted length.
        max: usize,
    },
    /// The address is not of the form `local@domain.tld`.
    #[error("value is not a valid email address")]
    Malformed,
}

/// Maximum permitted address length (RFC 5321 path limit).
pub const EMAIL_MAX: usize = 254;

/// Dot-atom local part; domain labels of 1-63 characters with at least one dot.
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
    r"@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
    r"(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
);

/// Compiled [`EMAIL_PATTERN`].
///
/// # Panics
/// Panics on first use if the constant pattern fails to compile.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN)
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Syntactically valid email address.
///
/// The address is stored exactly as supplied; no case folding is applied, so
/// exact-match filters compare against what the client sent.
///
/// # Examples
/// ```
/// use backend::domain::EmailAddress;
///
/// let email = EmailAddress::new("a@x.com").expect("valid email");
/// assert_eq!(email.as_ref(), "a@x.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, EmailValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, EmailValidationError> {
        if email.trim().is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn email_pattern_compiles() {
        let regex = LazyLock::force(&EMAIL_RE);
        assert_eq!(regex.as_str(), EMAIL_PATTERN);
    }

    #[rstest]
    #[case("a@x.com")]
    #[case("first.last@example.co.uk")]
    #[case("user+tag@sub.domain.io")]
    #[case("o'neil@x-y.org")]
    fn accepts_valid_addresses(#[case] raw: &str) {
        let email = EmailAddress::new(raw).expect("address should validate");
        assert_eq!(email.to_string(), raw);
    }

    #[rstest]
    #[case("", EmailValidationError::Empty)]
    #[case("   ", EmailValidationError::Empty)]
    #[case("plain", EmailValidationError::Malformed)]
    #[case("no-domain@", EmailValidationError::Malformed)]
    #[case("@x.com", EmailValidationError::Malformed)]
    #[case("a@localhost", EmailValidationError::Malformed)]
    #[case("a..b@x.com", EmailValidationError::Malformed)]
    #[case("a b@x.com", EmailValidationError::Malformed)]
    #[case("a@-x.com", EmailValidationError::Malformed)]
    fn rejects_invalid_addresses(#[case] raw: &str, #[case] expected: EmailValidationError) {
        assert_eq!(EmailAddress::new(raw), Err(expected));
    }

    #[rstest]
    fn rejects_overlong_addresses() {
        let raw = format!("{}@x.com", "a".repeat(EMAIL_MAX));
        assert_eq!(
            EmailAddress::new(raw),
            Err(EmailValidationError::TooLong { max: EMAIL_MAX })
        );
    }

    #[rstest]
    fn deserialisation_validates() {
        let result = serde_json::from_str::<EmailAddress>("\"nope\"");
        assert!(result.is_err());
    }
}
