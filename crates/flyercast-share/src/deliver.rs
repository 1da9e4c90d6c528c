//! Guaranteed local download of an acquired blob.

use std::path::{Path, PathBuf};

use bytes::Bytes;

use flyercast_core::{AppError, AppResult};

use crate::artifact::Artifact;

/// Writes fallback downloads into a target directory.
#[derive(Debug, Clone)]
pub struct DownloadSink {
    dir: PathBuf,
}

impl DownloadSink {
    /// Create a sink writing into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the blob under the artifact's filename and return the final
    /// path.
    ///
    /// The bytes go through a temporary file in the same directory which
    /// is persisted to the final name; the transient handle is released
    /// as soon as the rename completes. Existing files are never
    /// overwritten; a numeric suffix is appended instead.
    pub async fn deliver(&self, artifact: &Artifact, bytes: &Bytes) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::with_source(
                flyercast_core::error::ErrorKind::Storage,
                format!("Failed to create download dir: {}", self.dir.display()),
                e,
            )
        })?;

        let target = unique_path(&self.dir, &artifact.file_name);
        let dir = self.dir.clone();
        let data = bytes.clone();
        let written = tokio::task::spawn_blocking(move || -> std::io::Result<PathBuf> {
            let file = tempfile::NamedTempFile::new_in(&dir)?;
            std::fs::write(file.path(), &data)?;
            file.persist(&target).map_err(|e| e.error)?;
            Ok(target)
        })
        .await
        .map_err(|e| AppError::internal(format!("Download task panicked: {e}")))?
        .map_err(|e| {
            AppError::with_source(
                flyercast_core::error::ErrorKind::Storage,
                "Failed to write download",
                e,
            )
        })?;

        tracing::debug!(path = %written.display(), bytes = bytes.len(), "Saved fallback download");
        Ok(written)
    }
}

/// First non-colliding path for a filename inside a directory.
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };
    for n in 1u32.. {
        let name = match ext {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!("suffix search is unbounded")
}
