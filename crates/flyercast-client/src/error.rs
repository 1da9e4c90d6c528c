//! Client-side error taxonomy with status fidelity.
//!
//! [`ClientError`] keeps the raw HTTP status so downstream consumers (the
//! share resolver in particular) can distinguish 404 missing, 403
//! forbidden, and 5xx transient causes. It maps into
//! [`flyercast_core::AppError`] at the application boundary.

use thiserror::Error;

use flyercast_core::error::{AppError, ErrorKind};

/// Errors produced by the REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached at the transport level.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// The backend answered with a non-success status.
    #[error("server returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },
    /// The backend answered 2xx with an empty body where content was
    /// expected.
    #[error("empty response body")]
    EmptyPayload,
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request could not be built (bad URL, unreadable upload file).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// HTTP status of a [`ClientError::Status`], if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Unreachable(err.to_string())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Unreachable(msg) => {
                AppError::new(ErrorKind::Network, format!("Backend unreachable: {msg}"))
            }
            ClientError::Status { status, message } => {
                let kind = match status {
                    401 => ErrorKind::Authentication,
                    403 => ErrorKind::Authorization,
                    404 => ErrorKind::NotFound,
                    409 => ErrorKind::Conflict,
                    _ => ErrorKind::Server,
                };
                AppError::new(kind, format!("Server error ({status}): {message}"))
            }
            ClientError::EmptyPayload => {
                AppError::new(ErrorKind::EmptyPayload, "Empty response body")
            }
            ClientError::Decode(msg) => AppError::new(
                ErrorKind::Serialization,
                format!("Response decode failed: {msg}"),
            ),
            ClientError::InvalidRequest(msg) => AppError::validation(msg.clone()),
        }
    }
}
