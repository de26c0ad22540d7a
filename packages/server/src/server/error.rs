use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use waitlist_core::EmailError;

/// Every failure the API reports. The display string is the `message` the
/// client sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// Body could not be read as the expected JSON. The detail is logged, not returned.
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }

        let body = MessageBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(EmailError::Required).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("eof".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::from(EmailError::Invalid).to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ApiError::Internal("expected value at line 1".into()).to_string(),
            "Internal server error"
        );
    }
}
