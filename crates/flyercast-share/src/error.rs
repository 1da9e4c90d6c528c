//! Share-pipeline error taxonomy.

use thiserror::Error;

use flyercast_core::error::{AppError, ErrorKind};
use flyercast_client::ClientError;

/// Errors arising while acquiring or handing off media bytes.
///
/// Acquisition-stage errors are swallowed and trigger the next fallback
/// strategy; only exhaustion of all strategies surfaces one of these to
/// the user, picked by [`most_specific`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The network transport failed before any server answer.
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),
    /// The server answered with an error status.
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code (404 missing, 403 forbidden, 5xx transient).
        status: u16,
    },
    /// A stage produced an empty or zero-length blob.
    #[error("empty payload")]
    EmptyPayload,
    /// Image decode or re-encode failed.
    #[error("image encoding failed: {0}")]
    Encoding(String),
    /// The user dismissed the share sheet.
    #[error("share cancelled by user")]
    UserCancelled,
    /// The share capability is absent or cannot handle the file type.
    #[error("sharing not supported: {0}")]
    UnsupportedCapability(String),
}

impl ShareError {
    /// A human-readable message distinguishing network vs. access vs.
    /// expiry causes, always pointing at the guaranteed fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkUnreachable(_) => {
                "The image service could not be reached. Check your connection, \
                 or download the image manually and try again."
                    .to_string()
            }
            Self::Server { status: 404 } => {
                "The image could not be found; the link may have expired. \
                 Download it manually from the dashboard instead."
                    .to_string()
            }
            Self::Server { status: 403 } => {
                "Access to the image was denied. Sign in again, \
                 or download it manually from the dashboard."
                    .to_string()
            }
            Self::Server { status } => format!(
                "The image service reported an error (status {status}). \
                 Try again later, or download the image manually."
            ),
            Self::EmptyPayload => {
                "The image service returned no data. \
                 Download the image manually from the dashboard."
                    .to_string()
            }
            Self::Encoding(_) => {
                "The image could not be processed. \
                 Download it manually from the dashboard."
                    .to_string()
            }
            Self::UserCancelled => "Share cancelled.".to_string(),
            Self::UnsupportedCapability(_) => {
                "Sharing is not available on this device. \
                 The image can still be downloaded manually."
                    .to_string()
            }
        }
    }

    /// Ranking used to pick the most informative failure once every
    /// acquisition strategy has been tried.
    fn specificity(&self) -> u8 {
        match self {
            Self::Server { status } if (400..500).contains(status) => 5,
            Self::EmptyPayload => 4,
            Self::Encoding(_) => 3,
            Self::Server { .. } => 2,
            Self::NetworkUnreachable(_) => 1,
            Self::UserCancelled | Self::UnsupportedCapability(_) => 0,
        }
    }
}

/// Pick the most specific error out of the per-stage failures; ties keep
/// the earliest stage's error.
pub fn most_specific(errors: Vec<ShareError>) -> ShareError {
    errors
        .into_iter()
        .reduce(|best, next| {
            if next.specificity() > best.specificity() {
                next
            } else {
                best
            }
        })
        .unwrap_or_else(|| ShareError::UnsupportedCapability("no acquisition strategy".into()))
}

impl From<ClientError> for ShareError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unreachable(msg) => Self::NetworkUnreachable(msg),
            ClientError::Status { status, .. } => Self::Server { status },
            ClientError::EmptyPayload => Self::EmptyPayload,
            ClientError::Decode(msg) => Self::NetworkUnreachable(msg),
            ClientError::InvalidRequest(msg) => Self::UnsupportedCapability(msg),
        }
    }
}

impl From<ShareError> for AppError {
    fn from(err: ShareError) -> Self {
        let kind = match &err {
            ShareError::NetworkUnreachable(_) => ErrorKind::Network,
            ShareError::Server { status: 403 } => ErrorKind::Authorization,
            ShareError::Server { status: 404 } => ErrorKind::NotFound,
            ShareError::Server { .. } => ErrorKind::Server,
            ShareError::EmptyPayload => ErrorKind::EmptyPayload,
            ShareError::Encoding(_) => ErrorKind::Encoding,
            ShareError::UserCancelled => ErrorKind::Cancelled,
            ShareError::UnsupportedCapability(_) => ErrorKind::Unsupported,
        };
        AppError::new(kind, err.user_message())
    }
}
