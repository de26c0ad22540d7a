//! Join flow: register an email with the verification service, then redirect
//! to the verify page with the issued token.
//!
//! ```text
//! Idle ──begin(email)──> Loading ──2xx + token──> Success ──2s──> /verify/<token>
//!   │                       └──non-2xx / transport / no token──> Error
//!   └──no email──> Error
//! ```

use std::time::Duration;

use tracing::{info, warn};

use crate::client::{or_fallback, ServiceError, ServiceReply, VerificationService};
use crate::effects::{Effect, Notice};
use crate::email::EmailAddress;
use crate::routes::verify_path;
use crate::SubmissionState;

/// Time the success state stays on screen before redirecting.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const JOIN_FAILED: &str = "Failed to join waitlist";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";
pub const TOKEN_MISSING: &str = "Verification token missing from response";

/// State of one join page.
#[derive(Debug, Clone, Default)]
pub struct JoinFlow {
    state: SubmissionState,
    email: Option<EmailAddress>,
    token: Option<String>,
    error_message: Option<String>,
}

impl JoinFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Enter `Loading` and return the address to submit.
    ///
    /// Returns `None` without a request when the address is missing or invalid
    /// (the flow is then in `Error`) or when a request is already in flight.
    pub fn begin(&mut self, email: Option<&str>) -> Option<EmailAddress> {
        if self.state == SubmissionState::Loading {
            return None;
        }

        match EmailAddress::parse(email.unwrap_or_default()) {
            Ok(email) => {
                self.state = SubmissionState::Loading;
                self.email = Some(email.clone());
                self.token = None;
                self.error_message = None;
                Some(email)
            }
            Err(e) => {
                self.fail(e.to_string());
                None
            }
        }
    }

    /// Apply the service's answer. Replies arriving outside `Loading` are ignored.
    pub fn finish(&mut self, reply: Result<ServiceReply, ServiceError>) -> Vec<Effect> {
        if self.state != SubmissionState::Loading {
            return Vec::new();
        }

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                self.fail(or_fallback(e.to_string(), SOMETHING_WENT_WRONG));
                return Vec::new();
            }
        };

        if !reply.is_success() {
            self.fail(reply.message().unwrap_or(JOIN_FAILED).to_string());
            return Vec::new();
        }

        let Some(token) = reply.field("token").map(str::to_string) else {
            self.fail(TOKEN_MISSING.to_string());
            return Vec::new();
        };

        info!("Joined waitlist, redirecting to verification");
        self.state = SubmissionState::Success;
        let redirect = Effect::Navigate {
            to: verify_path(&token),
            after: REDIRECT_DELAY,
        };
        self.token = Some(token);

        vec![
            Effect::Notify(Notice::success("Success!", "Redirecting to verification...")),
            redirect,
        ]
    }

    /// [`begin`](Self::begin), one request, [`finish`](Self::finish).
    pub async fn run<S>(&mut self, service: &S, email: Option<&str>) -> Vec<Effect>
    where
        S: VerificationService + ?Sized,
    {
        let Some(email) = self.begin(email) else {
            return Vec::new();
        };
        let reply = service.request_verification(&email).await;
        self.finish(reply)
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "Join failed");
        self.state = SubmissionState::Error;
        self.error_message = Some(message);
    }
}
