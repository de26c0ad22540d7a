use axum::{body::Bytes, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use waitlist_core::{EmailAddress, EmailError};

use crate::server::error::ApiError;

pub const CHECK_INBOX: &str = "Please check your inbox to verify your email";

#[derive(Debug, Serialize)]
pub struct WaitlistResponse {
    pub message: String,
    pub email: EmailAddress,
}

/// `POST /api/waitlist`
///
/// Validates the address and answers with a canned confirmation. Nothing is
/// stored and nothing is forwarded.
///
/// The body is read as JSON whatever the `Content-Type`, since browsers send
/// a bare `fetch` body as `text/plain`.
pub async fn join_waitlist_handler(body: Bytes) -> Result<Json<WaitlistResponse>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    if payload.is_null() {
        return Err(ApiError::Internal("request body is null".to_string()));
    }

    let email = EmailAddress::parse(email_field(&payload)?)?;
    debug!(email = %email, "Waitlist signup accepted");

    Ok(Json(WaitlistResponse {
        message: CHECK_INBOX.to_string(),
        email,
    }))
}

/// Pull `email` out of an arbitrary JSON body.
///
/// Absent, `null`, `false`, `0` and `""` count as missing. Any other
/// non-string value is not an address.
fn email_field(payload: &Value) -> Result<String, EmailError> {
    match payload.get("email") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(EmailError::Required),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(EmailError::Required),
        Some(Value::String(email)) => Ok(email.clone()),
        Some(_) => Err(EmailError::Invalid),
    }
}
