//! Server functions fronting the verification service.
//!
//! The browser never talks to the service directly; the SSR server does, using
//! the shared reqwest client from `waitlist-core`. Transport failures come
//! back as [`ServiceError`] values so the page state machines see the same
//! errors either way.

use dioxus::prelude::*;
use waitlist_core::{ServiceError, ServiceReply};

/// `POST /verify {email}` on the verification service.
#[server]
async fn request_verification_fn(
    email: String,
) -> Result<Result<ServiceReply, ServiceError>, ServerFnError> {
    use waitlist_core::{EmailAddress, HttpVerificationService, VerificationService};

    let email = EmailAddress::parse(email)?;
    Ok(HttpVerificationService::from_env()
        .request_verification(&email)
        .await)
}

/// `GET /verify?token=...` on the verification service.
#[server]
async fn check_token_fn(token: String) -> Result<Result<ServiceReply, ServiceError>, ServerFnError> {
    use waitlist_core::{HttpVerificationService, VerificationService};

    Ok(HttpVerificationService::from_env().check_token(&token).await)
}

fn flatten(
    reply: Result<Result<ServiceReply, ServiceError>, ServerFnError>,
) -> Result<ServiceReply, ServiceError> {
    reply.unwrap_or_else(|e| Err(ServiceError::Network(e.to_string())))
}

pub async fn request_verification(email: &str) -> Result<ServiceReply, ServiceError> {
    flatten(request_verification_fn(email.to_string()).await)
}

pub async fn check_token(token: &str) -> Result<ServiceReply, ServiceError> {
    flatten(check_token_fn(token.to_string()).await)
}
