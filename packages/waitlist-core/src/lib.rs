//! Waitlist core
//!
//! Everything the waitlist site does that isn't markup lives here:
//!
//! - [`email`] validates addresses before anything touches the network
//! - [`client`] talks to the external verification service
//! - [`join`], [`verify`] and [`intake`] are the page state machines
//! - [`effects`] describes the delayed side effects those machines request
//! - [`animation`] models the decorative particle and text effects
//!
//! State machines never sleep. They return [`Effect`]s carrying a delay and the
//! host (the Dioxus app, or [`EffectRunner`] on tokio) executes them, which keeps
//! every timer owned by the page that asked for it.
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_core::{HttpVerificationService, JoinFlow};
//!
//! let service = HttpVerificationService::from_env();
//! let mut flow = JoinFlow::new();
//! let effects = flow.run(&service, Some("hello@example.com")).await;
//! ```

pub mod animation;
pub mod client;
pub mod countdown;
pub mod effects;
pub mod email;
pub mod intake;
pub mod join;
pub mod routes;
pub mod token;
pub mod verify;

pub use client::{HttpVerificationService, ServiceError, ServiceReply, VerificationService};
pub use countdown::{Countdown, CountdownDigits};
pub use effects::{Effect, Notice, NoticeTone};
#[cfg(feature = "runtime")]
pub use effects::EffectRunner;
pub use email::{EmailAddress, EmailError};
pub use intake::IntakeForm;
pub use join::JoinFlow;
pub use token::{decode_token, email_from_token, DecodedToken};
pub use verify::{resolve_token, ResendStep, VerificationKind, VerificationOutcome, VerifyFlow};

/// Lifecycle of one orchestrated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Success | SubmissionState::Error)
    }
}
