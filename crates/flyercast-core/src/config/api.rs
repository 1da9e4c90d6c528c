//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Backend API connection configuration.
///
/// The single `base_url` setting selects between the same-origin proxy
/// and the direct backend address; every request path is resolved
/// against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (proxy or direct address).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}
