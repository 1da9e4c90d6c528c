//! Local session persistence.
//!
//! The browser dashboard kept its login in web storage; the CLI keeps it
//! as a JSON file under the user's config directory.

use std::path::PathBuf;

use flyercast_core::{AppError, AppResult};
use flyercast_entity::session::Session;

/// Loads and saves the active session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location
    /// (`<config dir>/flyercast/session.json`).
    pub fn default_location() -> AppResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| AppError::configuration("No user config directory available"))?;
        Ok(Self::at(base.join("flyercast").join("session.json")))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session, if one exists.
    pub fn load(&self) -> AppResult<Option<Session>> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_slice(&data)?;
        Ok(Some(session))
    }

    /// Load the persisted session or fail with a sign-in hint.
    pub fn require(&self) -> AppResult<Session> {
        self.load()?
            .ok_or_else(|| AppError::authentication("Not signed in. Run `flyercast login` first"))
    }

    /// Persist a session.
    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    /// Remove the persisted session, if any.
    pub fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
