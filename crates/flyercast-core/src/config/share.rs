//! Share and download configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the share resolver and its download fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Directory where fallback downloads are written.
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
    /// External share handler command (e.g. `termux-share`). When unset,
    /// the platform share surface is probed from PATH.
    #[serde(default)]
    pub command: Option<String>,
    /// Extra arguments passed to the share handler before the file path.
    #[serde(default)]
    pub command_args: Vec<String>,
    /// Exit code of the share handler that signals user cancellation.
    /// 130 is the shell convention for termination by SIGINT.
    #[serde(default = "default_cancel_exit_code")]
    pub cancel_exit_code: i32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            command: None,
            command_args: Vec::new(),
            cancel_exit_code: default_cancel_exit_code(),
        }
    }
}

fn default_download_dir() -> String {
    "downloads".to_string()
}

fn default_cancel_exit_code() -> i32 {
    130
}
