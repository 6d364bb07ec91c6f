//! On-disk persistence of the current session.

use super::models::Session;
use crate::backend::utils::paths::get_session_path;
use crate::utils::Result;
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the application directory.
    pub fn in_app_dir() -> Self {
        Self::new(get_session_path())
    }

    /// Saves the session to disk.
    pub async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Loads the stored session. Unreadable or corrupt files count as no session.
    pub async fn load(&self) -> Option<Session> {
        let json = fs::read_to_string(&self.path).await.ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Ignoring corrupt session file {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Deletes the stored session. Missing files are fine.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
