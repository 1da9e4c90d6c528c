//! Native share surface abstraction.

pub mod command;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use flyercast_core::config::share::ShareConfig;

pub use command::CommandShareSurface;

/// A file handed to the share surface, with its caption.
///
/// The caption always accompanies the file; surfaces that cannot carry
/// text simply ignore it.
#[derive(Debug, Clone)]
pub struct SharePayload {
    /// Filename presented to the receiving application.
    pub file_name: String,
    /// MIME type of the bytes.
    pub mime: &'static str,
    /// The binary content.
    pub bytes: Bytes,
    /// Accompanying text.
    pub caption: Option<String>,
}

/// Why a share surface handoff did not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The user dismissed the share sheet. Terminal and silent.
    #[error("share cancelled by user")]
    Cancelled,
    /// The surface failed; the caller falls back to a local download.
    #[error("share surface failed: {0}")]
    Failed(String),
}

/// The operating system's cross-application content-sharing facility.
#[async_trait]
pub trait ShareSurface: Send + Sync + fmt::Debug {
    /// Surface name for logging.
    fn name(&self) -> &'static str;

    /// Capability check: can this surface share a file of the given MIME
    /// type?
    fn can_share(&self, mime: &str) -> bool;

    /// Hand the payload to the surface and wait for the user to finish.
    async fn share(&self, payload: &SharePayload) -> Result<(), SurfaceError>;
}

/// Probe for a usable share surface.
///
/// A configured command wins; otherwise known handlers are looked up on
/// PATH. Returns `None` when the platform has no share facility.
pub fn detect(config: &ShareConfig) -> Option<Arc<dyn ShareSurface>> {
    if let Some(command) = &config.command {
        return Some(Arc::new(CommandShareSurface::new(
            command.clone(),
            config.command_args.clone(),
            config.cancel_exit_code,
        )));
    }
    for candidate in ["termux-share"] {
        if binary_on_path(candidate) {
            return Some(Arc::new(CommandShareSurface::new(
                candidate.to_string(),
                Vec::new(),
                config.cancel_exit_code,
            )));
        }
    }
    None
}

/// Look a binary up on PATH.
fn binary_on_path(name: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| dir.join(name).is_file())
}
