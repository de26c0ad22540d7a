//! Verify flow: check a token with the verification service and show the
//! outcome, plus the "resend verification email" action.
//!
//! ```text
//! Idle ──begin(token)──> Loading ──2xx, type=success──> Success (+confetti after 500ms)
//!   │                       └──non-2xx / type!=success / transport──> Error
//!   └──no token──> Error("Invalid verification link")
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::{or_fallback, ServiceError, ServiceReply, VerificationService};
use crate::effects::{Effect, Notice};
use crate::email::EmailAddress;
use crate::token::decode_token;
use crate::SubmissionState;

/// Pause between showing success and firing the confetti.
pub const CONFETTI_DELAY: Duration = Duration::from_millis(500);

pub const INVALID_LINK: &str = "Invalid verification link";
pub const VERIFICATION_FAILED: &str = "Verification failed";
pub const VERIFICATION_RETRY: &str = "Verification failed. Please try again.";

/// Pick the token from a verification link.
///
/// A non-empty `token` query parameter wins; otherwise the path segments after
/// `/verify` are joined with `/` (tokens may contain slashes).
pub fn resolve_token(query_token: Option<&str>, segments: &[String]) -> Option<String> {
    if let Some(token) = query_token.filter(|token| !token.is_empty()) {
        return Some(token.to_string());
    }

    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/");

    (!joined.is_empty()).then_some(joined)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationKind {
    Success,
    Error,
}

/// What the service said about a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub kind: VerificationKind,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl VerificationOutcome {
    /// Decode a 2xx reply body. Anything but `type: "success"` counts as an error.
    pub fn from_reply(reply: &ServiceReply) -> Self {
        let kind = match reply.field("type") {
            Some("success") => VerificationKind::Success,
            _ => VerificationKind::Error,
        };

        Self {
            kind,
            email: reply.field("email").map(str::to_string),
            message: reply.message().map(str::to_string),
        }
    }
}

/// Outcome of asking to resend the verification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendStep {
    /// Send to this address, then call [`VerifyFlow::finish_resend`]
    Send(EmailAddress),
    /// Nothing to send; show this notice
    Notify(Notice),
    /// A resend is already in flight
    Busy,
}

/// State of one verify page.
#[derive(Debug, Clone, Default)]
pub struct VerifyFlow {
    state: SubmissionState,
    token: Option<String>,
    email: Option<String>,
    error_message: Option<String>,
    outcome: Option<VerificationOutcome>,
    resend_pending: bool,
}

impl VerifyFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Best known email: from the reply if there was one, else recovered from the token.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn outcome(&self) -> Option<&VerificationOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_resending(&self) -> bool {
        self.resend_pending
    }

    /// Enter `Loading` and return the token to check.
    ///
    /// Returns `None` without a request when there is no token (the flow is
    /// then in `Error`) or when a check is already in flight.
    pub fn begin(&mut self, token: Option<String>) -> Option<String> {
        if self.state == SubmissionState::Loading {
            return None;
        }

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            self.fail(INVALID_LINK.to_string());
            return None;
        };

        self.state = SubmissionState::Loading;
        self.email = decode_token(&token).email().map(str::to_string);
        self.error_message = None;
        self.outcome = None;
        self.token = Some(token.clone());
        Some(token)
    }

    /// Apply the service's answer. Replies arriving outside `Loading` are ignored.
    pub fn finish(&mut self, reply: Result<ServiceReply, ServiceError>) -> Vec<Effect> {
        if self.state != SubmissionState::Loading {
            return Vec::new();
        }

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                self.fail(or_fallback(e.to_string(), VERIFICATION_RETRY));
                return Vec::new();
            }
        };

        if !reply.is_success() {
            self.fail(reply.message().unwrap_or(VERIFICATION_FAILED).to_string());
            return Vec::new();
        }

        let outcome = VerificationOutcome::from_reply(&reply);
        if outcome.email.is_some() {
            self.email = outcome.email.clone();
        }

        let effects = match outcome.kind {
            VerificationKind::Success => {
                info!("Email verified");
                self.state = SubmissionState::Success;
                vec![Effect::Confetti {
                    after: CONFETTI_DELAY,
                }]
            }
            VerificationKind::Error => {
                self.fail(
                    outcome
                        .message
                        .clone()
                        .unwrap_or_else(|| VERIFICATION_FAILED.to_string()),
                );
                Vec::new()
            }
        };

        self.outcome = Some(outcome);
        effects
    }

    /// [`begin`](Self::begin), one request, [`finish`](Self::finish).
    pub async fn run<S>(&mut self, service: &S, token: Option<String>) -> Vec<Effect>
    where
        S: VerificationService + ?Sized,
    {
        let Some(token) = self.begin(token) else {
            return Vec::new();
        };
        let reply = service.check_token(&token).await;
        self.finish(reply)
    }

    /// Start a resend. Independent of the verification state.
    pub fn begin_resend(&mut self) -> ResendStep {
        if self.resend_pending {
            return ResendStep::Busy;
        }

        // The known email is re-validated, so an address the service sent back
        // malformed is reported as missing instead of being posted.
        match self.email.as_deref().map(|email| EmailAddress::parse(email)) {
            Some(Ok(email)) => {
                self.resend_pending = true;
                ResendStep::Send(email)
            }
            _ => ResendStep::Notify(Notice::destructive(
                "Email not found",
                "Please try joining the waitlist again.",
            )),
        }
    }

    pub fn finish_resend(&mut self, reply: Result<ServiceReply, ServiceError>) -> Notice {
        self.resend_pending = false;

        match reply {
            Ok(reply) if reply.is_success() => Notice::success(
                "Verification email sent!",
                "Check your inbox for the verification link.",
            ),
            Ok(reply) => {
                warn!(status = reply.status, "Resend rejected");
                resend_failed()
            }
            Err(e) => {
                warn!(error = %e, "Resend failed");
                resend_failed()
            }
        }
    }

    /// [`begin_resend`](Self::begin_resend), at most one request,
    /// [`finish_resend`](Self::finish_resend). `None` while another resend is in flight.
    pub async fn resend<S>(&mut self, service: &S) -> Option<Notice>
    where
        S: VerificationService + ?Sized,
    {
        match self.begin_resend() {
            ResendStep::Send(email) => {
                let reply = service.request_verification(&email).await;
                Some(self.finish_resend(reply))
            }
            ResendStep::Notify(notice) => Some(notice),
            ResendStep::Busy => None,
        }
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "Verification failed");
        self.state = SubmissionState::Error;
        self.error_message = Some(message);
    }
}

fn resend_failed() -> Notice {
    Notice::destructive("Failed to resend email", "Please try again later.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn loading(token: &str) -> VerifyFlow {
        let mut flow = VerifyFlow::new();
        assert!(flow.begin(Some(token.to_string())).is_some());
        flow
    }

    #[test]
    fn test_query_token_wins() {
        assert_eq!(
            resolve_token(Some("q"), &segments(&["p"])),
            Some("q".to_string())
        );
    }

    #[test]
    fn test_path_segments_are_joined() {
        assert_eq!(
            resolve_token(None, &segments(&["ab", "cd+ef="])),
            Some("ab/cd+ef=".to_string())
        );
        assert_eq!(
            resolve_token(Some(""), &segments(&["tok"])),
            Some("tok".to_string())
        );
    }

    #[test]
    fn test_no_token_anywhere() {
        assert_eq!(resolve_token(None, &[]), None);
        assert_eq!(resolve_token(Some(""), &segments(&[""])), None);
    }

    #[test]
    fn test_missing_token_is_invalid_link() {
        let mut flow = VerifyFlow::new();
        assert!(flow.begin(None).is_none());
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.error_message(), Some(INVALID_LINK));
    }

    #[test]
    fn test_begin_recovers_email_from_token() {
        let flow = loading("aGVsbG9AZXhhbXBsZS5jb20=");
        assert_eq!(flow.state(), SubmissionState::Loading);
        assert_eq!(flow.email(), Some("hello@example.com"));
    }

    #[test]
    fn test_success_fires_confetti_once() {
        let mut flow = loading("abc");
        let effects = flow.finish(Ok(ServiceReply::new(
            200,
            json!({"type": "success", "email": "a@b.com"}),
        )));

        assert_eq!(flow.state(), SubmissionState::Success);
        assert_eq!(flow.email(), Some("a@b.com"));
        assert_eq!(
            effects,
            vec![Effect::Confetti {
                after: Duration::from_millis(500)
            }]
        );
    }

    #[test]
    fn test_logical_error_keeps_email_and_message() {
        let mut flow = loading("abc");
        let effects = flow.finish(Ok(ServiceReply::new(
            200,
            json!({"type": "error", "email": "a@b.com", "message": "Token expired"}),
        )));

        assert!(effects.is_empty());
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.email(), Some("a@b.com"));
        assert_eq!(flow.error_message(), Some("Token expired"));
        assert_eq!(
            flow.outcome().map(|o| o.kind),
            Some(VerificationKind::Error)
        );
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let mut flow = loading("abc");
        flow.finish(Ok(ServiceReply::new(200, json!({"email": "a@b.com"}))));
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.error_message(), Some(VERIFICATION_FAILED));
    }

    #[test]
    fn test_non_2xx_message_is_shown_verbatim() {
        let mut flow = loading("abc");
        flow.finish(Ok(ServiceReply::new(503, json!({"message": "server down"}))));
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(flow.error_message(), Some("server down"));
    }

    #[test]
    fn test_transport_error() {
        let mut flow = loading("abc");
        flow.finish(Err(ServiceError::Parse("expected value".into())));
        assert_eq!(flow.state(), SubmissionState::Error);
        assert_eq!(
            flow.error_message(),
            Some("Invalid response from verification service: expected value")
        );
    }

    #[test]
    fn test_resend_without_email() {
        let mut flow = loading("opaque-token");
        assert_eq!(
            flow.begin_resend(),
            ResendStep::Notify(Notice::destructive(
                "Email not found",
                "Please try joining the waitlist again."
            ))
        );
        assert!(!flow.is_resending());
    }

    #[test]
    fn test_resend_with_malformed_reply_email() {
        let mut flow = loading("opaque-token");
        flow.finish(Ok(ServiceReply::new(
            200,
            json!({"type": "error", "email": "not-an-address", "message": "Link expired"}),
        )));
        assert_eq!(flow.email(), Some("not-an-address"));

        assert_eq!(
            flow.begin_resend(),
            ResendStep::Notify(Notice::destructive(
                "Email not found",
                "Please try joining the waitlist again."
            ))
        );
        assert!(!flow.is_resending());
    }

    #[test]
    fn test_resend_is_guarded_while_pending() {
        let mut flow = loading("aGVsbG9AZXhhbXBsZS5jb20=");
        assert!(matches!(flow.begin_resend(), ResendStep::Send(_)));
        assert_eq!(flow.begin_resend(), ResendStep::Busy);

        let notice = flow.finish_resend(Ok(ServiceReply::new(200, json!({"token": "t"}))));
        assert_eq!(notice.title, "Verification email sent!");
        assert!(matches!(flow.begin_resend(), ResendStep::Send(_)));
    }

    #[test]
    fn test_resend_failure_notice() {
        let mut flow = loading("aGVsbG9AZXhhbXBsZS5jb20=");
        flow.begin_resend();
        let notice = flow.finish_resend(Ok(ServiceReply::new(500, json!({}))));
        assert_eq!(notice.title, "Failed to resend email");
        assert_eq!(notice.description, "Please try again later.");
    }
}
