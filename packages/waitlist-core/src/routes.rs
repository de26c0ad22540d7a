//! Paths of the client-rendered pages.

use crate::email::EmailAddress;

pub const HOME: &str = "/";
pub const JOIN: &str = "/waitlist";
pub const VERIFY: &str = "/verify";

/// `/waitlist?email=<encoded>`
pub fn join_path(email: &EmailAddress) -> String {
    format!("{JOIN}?email={}", urlencoding::encode(email.as_str()))
}

/// `/verify/<token>`
///
/// The token is placed as-is: tokens containing `/` come back as several path
/// segments and are re-joined by [`crate::resolve_token`].
pub fn verify_path(token: &str) -> String {
    format!("{VERIFY}/{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_encodes_email() {
        let email = EmailAddress::parse("first+tag@example.com").unwrap();
        assert_eq!(join_path(&email), "/waitlist?email=first%2Btag%40example.com");
    }

    #[test]
    fn test_verify_path() {
        assert_eq!(verify_path("abc123"), "/verify/abc123");
    }
}
