//! Client for the external verification service.
//!
//! The service exposes one path, `/verify`:
//!
//! - `POST /verify {email}` registers an address and answers `{token}`.
//!   Resending a verification email is the same call.
//! - `GET /verify?token=...` answers `{email, type, message?}`.
//!
//! Replies are handed back raw (status + JSON body). Deciding what a status
//! means is the orchestrators' job.

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::email::EmailAddress;

pub const DEFAULT_SERVICE_URL: &str = "http://backend.easyply.in";

static SERVICE_URL: OnceLock<String> = OnceLock::new();

/// Set the service base URL. Call this once at startup; later calls are ignored.
pub fn init_service_url(url: impl Into<String>) {
    SERVICE_URL.set(url.into()).ok();
}

/// The configured service base URL, falling back to `VERIFY_SERVICE_URL` and
/// then [`DEFAULT_SERVICE_URL`].
pub fn service_url() -> &'static str {
    SERVICE_URL.get_or_init(|| {
        std::env::var("VERIFY_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string())
    })
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ServiceError {
    /// Connection refused, DNS failure, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not JSON
    #[error("Invalid response from verification service: {0}")]
    Parse(String),
}

/// A reply that made it back, whatever its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceReply {
    pub status: u16,
    pub body: Value,
}

impl ServiceReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A non-empty string field of the body.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

/// `message` unless it is blank, then `fallback`.
pub(crate) fn or_fallback(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Transport seam for the join/verify flows.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait VerificationService {
    /// `POST /verify {email}`
    async fn request_verification(&self, email: &EmailAddress)
        -> Result<ServiceReply, ServiceError>;

    /// `GET /verify?token=...`
    async fn check_token(&self, token: &str) -> Result<ServiceReply, ServiceError>;
}

#[derive(Serialize)]
struct JoinRequest<'a> {
    email: &'a str,
}

/// reqwest-backed [`VerificationService`].
#[derive(Clone)]
pub struct HttpVerificationService {
    client: Client,
    base_url: String,
}

impl HttpVerificationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for [`service_url`].
    pub fn from_env() -> Self {
        Self::new(service_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/verify", self.base_url)
    }

    async fn read_reply(response: reqwest::Response) -> Result<ServiceReply, ServiceError> {
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        // resend only looks at the status, so an empty 2xx is still a valid reply
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| ServiceError::Parse(e.to_string()))?
        };

        debug!(status, "Verification service replied");
        Ok(ServiceReply { status, body })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl VerificationService for HttpVerificationService {
    async fn request_verification(
        &self,
        email: &EmailAddress,
    ) -> Result<ServiceReply, ServiceError> {
        debug!(email = %email, "Requesting verification email");

        let response = self
            .client
            .post(self.endpoint())
            .json(&JoinRequest {
                email: email.as_str(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Verification request failed");
                ServiceError::Network(e.to_string())
            })?;

        Self::read_reply(response).await
    }

    async fn check_token(&self, token: &str) -> Result<ServiceReply, ServiceError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("token", token)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Token check failed");
                ServiceError::Network(e.to_string())
            })?;

        Self::read_reply(response).await
    }
}
