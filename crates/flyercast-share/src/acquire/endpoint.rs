//! Server-mediated acquisition through the download endpoint.

use async_trait::async_trait;
use bytes::Bytes;

use flyercast_client::ApiClient;

use crate::error::ShareError;
use crate::media::MediaReference;

use super::AcquireStrategy;

/// Fetches the blob through the backend's download endpoint.
///
/// This routes through the same-origin backend with the session attached,
/// bypassing cross-origin restrictions on the stored image.
pub struct EndpointStrategy {
    client: ApiClient,
}

impl EndpointStrategy {
    /// Create the strategy around an authenticated client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AcquireStrategy for EndpointStrategy {
    fn name(&self) -> &'static str {
        "endpoint"
    }

    async fn acquire(&self, reference: &MediaReference) -> Result<Bytes, ShareError> {
        let Some(endpoint) = reference.download_endpoint.as_deref() else {
            return Err(ShareError::UnsupportedCapability(
                "no download endpoint".into(),
            ));
        };
        let bytes = self.client.get_bytes(endpoint).await?;
        Ok(bytes)
    }
}
