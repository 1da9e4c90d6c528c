//! Ordered acquisition strategies.
//!
//! Each strategy is tried exactly once per resolve; there is no retry
//! policy. The ordered chain is the only resilience mechanism.

pub mod direct;
pub mod endpoint;
pub mod reencode;

use async_trait::async_trait;
use bytes::Bytes;

use flyercast_client::ApiClient;

use crate::error::{ShareError, most_specific};
use crate::media::MediaReference;

pub use direct::DirectStrategy;
pub use endpoint::EndpointStrategy;
pub use reencode::ReencodeStrategy;

/// One way of obtaining the binary content of a media resource.
#[async_trait]
pub trait AcquireStrategy: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Try to obtain a non-empty blob for the reference.
    async fn acquire(&self, reference: &MediaReference) -> Result<Bytes, ShareError>;
}

/// The standard strategy order: server-mediated endpoint, direct fetch,
/// fetch + re-encode.
pub fn standard_strategies(client: &ApiClient) -> Vec<Box<dyn AcquireStrategy>> {
    vec![
        Box::new(EndpointStrategy::new(client.clone())),
        Box::new(DirectStrategy::new()),
        Box::new(ReencodeStrategy::new(
            client.base_url().clone(),
            client.token().map(String::from),
        )),
    ]
}

/// Walk the strategies in order until one yields a non-empty blob.
///
/// Per-stage failures are swallowed (logged at debug) and trigger the
/// next strategy; an empty blob counts as a stage failure, not success.
/// Exhaustion returns the most specific underlying error.
pub async fn acquire_bytes(
    strategies: &[Box<dyn AcquireStrategy>],
    reference: &MediaReference,
) -> Result<Bytes, ShareError> {
    let mut failures = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        match strategy.acquire(reference).await {
            Ok(bytes) if bytes.is_empty() => {
                tracing::debug!(strategy = strategy.name(), "Strategy produced empty blob");
                failures.push(ShareError::EmptyPayload);
            }
            Ok(bytes) => {
                tracing::debug!(
                    strategy = strategy.name(),
                    bytes = bytes.len(),
                    "Acquired media bytes"
                );
                return Ok(bytes);
            }
            Err(err) => {
                tracing::debug!(strategy = strategy.name(), error = %err, "Strategy failed");
                failures.push(err);
            }
        }
    }
    Err(most_specific(failures))
}
