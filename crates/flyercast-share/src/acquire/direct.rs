//! Direct cross-origin acquisition with credentials omitted.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::error::ShareError;
use crate::media::MediaReference;

use super::AcquireStrategy;

/// Fetches the primary URL directly, without any credentials.
///
/// No session token and no cookies are sent; a fresh anonymous client is
/// the whole point of this stage.
pub struct DirectStrategy {
    http: reqwest::Client,
}

impl DirectStrategy {
    /// Create the anonymous direct-fetch strategy.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for DirectStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AcquireStrategy for DirectStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn acquire(&self, reference: &MediaReference) -> Result<Bytes, ShareError> {
        let Some(raw) = reference.primary_url.as_deref() else {
            return Err(ShareError::UnsupportedCapability("no primary URL".into()));
        };
        let url = Url::parse(raw)
            .map_err(|e| ShareError::UnsupportedCapability(format!("bad primary URL: {e}")))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ShareError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShareError::Server {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShareError::NetworkUnreachable(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ShareError::EmptyPayload);
        }
        Ok(bytes)
    }
}
