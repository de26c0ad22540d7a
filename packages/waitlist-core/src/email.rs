//! Email address validation
//!
//! Syntax only: `local@domain.tld` with no whitespace and a single `@`.
//! No MX or DNS lookups are done anywhere in the site.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Why an address was rejected. The messages are shown to users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,

    #[error("Please enter a valid email address")]
    Invalid,
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `input` as-is. Callers decide whether to trim first.
    pub fn parse(input: impl Into<String>) -> Result<Self, EmailError> {
        let input = input.into();
        if input.is_empty() {
            return Err(EmailError::Required);
        }
        if !EMAIL_PATTERN.is_match(&input) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        for ok in [
            "a@b.co",
            "hello@example.com",
            "first.last+tag@sub.domain.org",
            "x@y.z.w",
            "ünï@cödé.dev",
        ] {
            assert!(EmailAddress::parse(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(EmailAddress::parse(""), Err(EmailError::Required));
    }

    #[test]
    fn test_rejects_missing_or_repeated_at() {
        for bad in ["example.com", "a@@b.com", "a@b@c.com", "@b.com", "a@"] {
            assert_eq!(EmailAddress::parse(bad), Err(EmailError::Invalid), "{bad}");
        }
    }

    #[test]
    fn test_rejects_missing_dot_after_at() {
        for bad in ["a@localhost", "a.b@com", "a@b.", "a@.com"] {
            assert_eq!(EmailAddress::parse(bad), Err(EmailError::Invalid), "{bad}");
        }
    }

    #[test]
    fn test_rejects_whitespace() {
        for bad in [" a@b.com", "a@b.com ", "a b@c.com", "a@b .com", "   "] {
            assert_eq!(EmailAddress::parse(bad), Err(EmailError::Invalid), "{bad:?}");
        }
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(EmailError::Required.to_string(), "Email is required");
        assert_eq!(
            EmailError::Invalid.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let email = EmailAddress::parse("a@b.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@b.com\"");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_accepts_every_well_formed_address(
                email in r"[^\s@]{1,16}@[^\s@]{1,16}\.[^\s@]{1,16}"
            ) {
                prop_assert_eq!(EmailAddress::parse(email.clone()).map(EmailAddress::into_inner), Ok(email));
            }

            #[test]
            fn test_rejects_without_at(email in r"[^\s@]{1,32}") {
                prop_assert_eq!(EmailAddress::parse(email), Err(EmailError::Invalid));
            }

            #[test]
            fn test_rejects_two_ats(
                email in r"[^\s@]{1,8}@[^\s@]{1,8}@[^\s@]{1,8}\.[^\s@]{1,8}"
            ) {
                prop_assert_eq!(EmailAddress::parse(email), Err(EmailError::Invalid));
            }

            #[test]
            fn test_rejects_without_dot_after_at(email in r"[^\s@]{1,16}@[^\s@.]{1,16}") {
                prop_assert_eq!(EmailAddress::parse(email), Err(EmailError::Invalid));
            }

            #[test]
            fn test_rejects_any_whitespace(
                email in r"[^\s@]{1,8}@[^\s@]{1,8}\.[^\s@]{1,8}",
                space in r"\s",
                at in 0usize..64,
            ) {
                let mut chars: Vec<char> = email.chars().collect();
                let at = at % (chars.len() + 1);
                chars.splice(at..at, space.chars());
                let email: String = chars.into_iter().collect();

                prop_assert_eq!(EmailAddress::parse(email), Err(EmailError::Invalid));
            }
        }
    }
}
