//! The share resolver pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use flyercast_core::AppResult;
use flyercast_core::config::share::ShareConfig;
use flyercast_client::ApiClient;

use crate::acquire::{AcquireStrategy, acquire_bytes, standard_strategies};
use crate::artifact::Artifact;
use crate::deliver::DownloadSink;
use crate::media::MediaReference;
use crate::origin::is_secure_origin;
use crate::outcome::ShareOutcome;
use crate::surface::{self, SharePayload, ShareSurface, SurfaceError};

/// One-time message shown with the first fallback download.
const DOWNLOAD_INSTRUCTIONS: &str = "The image was saved locally. \
     Open the app you want to share it with and attach the file manually.";

/// Resolves media references to a shared or downloaded artifact.
///
/// `resolve` never leaves the user without *some* usable artifact unless
/// every acquisition strategy fails. Concurrent resolves on different
/// resources are safe; re-entrant resolves on the same resource are the
/// caller's job to prevent.
pub struct ShareResolver {
    strategies: Vec<Box<dyn AcquireStrategy>>,
    surface: Option<Arc<dyn ShareSurface>>,
    sink: DownloadSink,
    instructions_shown: AtomicBool,
}

impl ShareResolver {
    /// Assemble a resolver from parts.
    pub fn new(
        strategies: Vec<Box<dyn AcquireStrategy>>,
        surface: Option<Arc<dyn ShareSurface>>,
        sink: DownloadSink,
    ) -> Self {
        Self {
            strategies,
            surface,
            sink,
            instructions_shown: AtomicBool::new(false),
        }
    }

    /// Standard wiring: the three-stage acquisition chain over the given
    /// client, the detected platform surface, and the configured download
    /// directory.
    ///
    /// The native surface is only offered for secure backend origins;
    /// plain-HTTP localhost counts as secure.
    pub fn for_client(client: &ApiClient, config: &ShareConfig) -> Self {
        let surface = if is_secure_origin(client.base_url()) {
            surface::detect(config)
        } else {
            None
        };
        Self::new(
            standard_strategies(client),
            surface,
            DownloadSink::new(config.download_dir.clone()),
        )
    }

    /// Obtain the bytes for the reference and deliver them.
    ///
    /// Outcomes follow the pipeline: acquisition failure on every stage
    /// is `Failed`; a capable surface yields `Shared` or (on user
    /// dismissal) `Cancelled`; everything else ends in a guaranteed
    /// local `Downloaded`. Local I/O failure on that last write is the
    /// only hard error.
    pub async fn resolve(&self, reference: &MediaReference) -> AppResult<ShareOutcome> {
        tracing::debug!(id = %reference.identifier, "Acquiring media bytes");
        let bytes = match acquire_bytes(&self.strategies, reference).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(id = %reference.identifier, error = %err, "All acquisition strategies failed");
                return Ok(ShareOutcome::Failed(err));
            }
        };

        let artifact = Artifact::build(
            &reference.suggested_title,
            reference.primary_url.as_deref(),
        );

        if let Some(surface) = &self.surface {
            if surface.can_share(artifact.mime) {
                tracing::debug!(surface = surface.name(), file = %artifact.file_name, "Handing off to share surface");
                let payload = SharePayload {
                    file_name: artifact.file_name.clone(),
                    mime: artifact.mime,
                    bytes: bytes.clone(),
                    caption: Some(reference.suggested_title.clone()),
                };
                match surface.share(&payload).await {
                    Ok(()) => return Ok(ShareOutcome::Shared),
                    Err(SurfaceError::Cancelled) => {
                        tracing::debug!(id = %reference.identifier, "Share cancelled by user");
                        return Ok(ShareOutcome::Cancelled);
                    }
                    Err(SurfaceError::Failed(reason)) => {
                        tracing::debug!(reason, "Share surface failed; falling back to download");
                    }
                }
            } else {
                tracing::debug!(
                    surface = surface.name(),
                    mime = artifact.mime,
                    "Surface cannot share this type; falling back to download"
                );
            }
        }

        let path = self.sink.deliver(&artifact, &bytes).await?;
        let instructions = if self.instructions_shown.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(DOWNLOAD_INSTRUCTIONS.to_string())
        };
        Ok(ShareOutcome::Downloaded { path, instructions })
    }
}
