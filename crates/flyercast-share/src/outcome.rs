//! Share attempt outcomes.

use std::path::PathBuf;

use crate::error::ShareError;

/// The terminal result of one share attempt.
///
/// Nothing persists beyond a single user-initiated action; nothing is
/// stored or cached between attempts.
#[derive(Debug)]
pub enum ShareOutcome {
    /// The bytes were handed to the OS share surface successfully.
    Shared,
    /// The bytes were saved locally as a fallback.
    Downloaded {
        /// Where the artifact was written.
        path: PathBuf,
        /// One-time manual-attach instructions; `None` once already
        /// shown by this resolver.
        instructions: Option<String>,
    },
    /// The user dismissed the OS share sheet. Terminal and silent.
    Cancelled,
    /// Every acquisition strategy failed.
    Failed(ShareError),
}

impl ShareOutcome {
    /// Whether the user ended up with a usable artifact.
    pub fn delivered(&self) -> bool {
        matches!(self, Self::Shared | Self::Downloaded { .. })
    }
}
