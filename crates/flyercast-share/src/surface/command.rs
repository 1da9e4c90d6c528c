//! Share surface backed by an external handler command.

use async_trait::async_trait;
use tokio::process::Command;

use super::{SharePayload, ShareSurface, SurfaceError};

/// Hands files to an external share handler such as `termux-share`.
///
/// The payload is written to a temporary file and the handler is invoked
/// with its path. Termination by SIGINT, or exiting with the configured
/// cancel code, is user cancellation; any other non-zero exit is a
/// surface failure.
#[derive(Debug, Clone)]
pub struct CommandShareSurface {
    program: String,
    args: Vec<String>,
    cancel_exit_code: i32,
}

impl CommandShareSurface {
    /// Create a surface around the given handler command.
    pub fn new(program: String, args: Vec<String>, cancel_exit_code: i32) -> Self {
        Self {
            program,
            args,
            cancel_exit_code,
        }
    }
}

#[async_trait]
impl ShareSurface for CommandShareSurface {
    fn name(&self) -> &'static str {
        "command"
    }

    fn can_share(&self, mime: &str) -> bool {
        mime.starts_with("image/")
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), SurfaceError> {
        let suffix = match payload.file_name.rsplit_once('.') {
            Some((_, ext)) => format!(".{ext}"),
            None => String::new(),
        };
        let file = tempfile::Builder::new()
            .prefix("flyercast-share-")
            .suffix(&suffix)
            .tempfile()
            .map_err(|e| SurfaceError::Failed(format!("temp file: {e}")))?;
        std::fs::write(file.path(), &payload.bytes)
            .map_err(|e| SurfaceError::Failed(format!("temp write: {e}")))?;

        // External handlers take only the file path; the caption lives in
        // the filename. Surfaces that can carry text use `payload.caption`.
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.arg(file.path());

        tracing::debug!(program = %self.program, file = %file.path().display(), "Invoking share handler");
        let status = command
            .status()
            .await
            .map_err(|e| SurfaceError::Failed(format!("handler spawn failed: {e}")))?;

        // The temp file must outlive the handler invocation.
        drop(file);

        if status.success() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if status.signal() == Some(libc_sigint()) {
                return Err(SurfaceError::Cancelled);
            }
        }

        match status.code() {
            Some(code) if code == self.cancel_exit_code => Err(SurfaceError::Cancelled),
            Some(code) => Err(SurfaceError::Failed(format!(
                "handler exited with status {code}"
            ))),
            None => Err(SurfaceError::Failed("handler terminated by signal".into())),
        }
    }
}

#[cfg(unix)]
fn libc_sigint() -> i32 {
    2
}
