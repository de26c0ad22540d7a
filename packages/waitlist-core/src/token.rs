//! Client-side recovery of an email address from a verification token.
//!
//! The verification service doesn't document its token format. Tokens seen in
//! the wild are either JWT-shaped (`header.payload.signature`), a bare
//! base64-encoded email, or fully opaque. Nothing here verifies a signature;
//! the decoded email is only used to pre-fill the resend action.

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine};
use serde::Deserialize;

const PADDING_INDIFFERENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PADDING_INDIFFERENT);
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PADDING_INDIFFERENT);

/// What a token turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedToken {
    /// JWT-shaped token whose payload carried `email` (or `sub`)
    Jwt { email: String },
    /// The whole token was a base64-encoded email address
    Base64Email(String),
    /// Nothing recoverable
    Opaque,
}

impl DecodedToken {
    pub fn email(&self) -> Option<&str> {
        match self {
            DecodedToken::Jwt { email } | DecodedToken::Base64Email(email) => Some(email),
            DecodedToken::Opaque => None,
        }
    }
}

#[derive(Deserialize)]
struct Claims {
    email: Option<String>,
    sub: Option<String>,
}

/// Try each known token shape in order. Never fails; unknown shapes are
/// [`DecodedToken::Opaque`].
pub fn decode_token(token: &str) -> DecodedToken {
    if let Some(email) = email_from_jwt(token) {
        return DecodedToken::Jwt { email };
    }
    if let Some(email) = email_from_base64(token) {
        return DecodedToken::Base64Email(email);
    }
    DecodedToken::Opaque
}

/// String form of [`decode_token`]: the recovered email, or `""`.
pub fn email_from_token(token: &str) -> String {
    decode_token(token).email().unwrap_or_default().to_string()
}

fn email_from_jwt(token: &str) -> Option<String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = decode_base64(parts[1])?;
    let claims: Claims = serde_json::from_slice(&payload).ok()?;

    claims
        .email
        .filter(|email| !email.is_empty())
        .or(claims.sub)
        .filter(|email| !email.is_empty())
}

fn email_from_base64(token: &str) -> Option<String> {
    let bytes = decode_base64(token)?;
    let decoded = String::from_utf8(bytes).ok()?;
    decoded.contains('@').then_some(decoded)
}

fn decode_base64(input: &str) -> Option<Vec<u8>> {
    URL_SAFE
        .decode(input)
        .or_else(|_| STANDARD.decode(input))
        .ok()
}
