//! JSON file holding the current practice session between CLI invocations.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::Result;
use crate::session::PracticeSession;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by `session.json` in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?.join(SESSION_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved session, or a fresh one if nothing usable is on disk.
    pub fn load(&self) -> PracticeSession {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            return PracticeSession::new();
        };
        match serde_json::from_str(&json) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "discarding unreadable session: {e}");
                PracticeSession::new()
            }
        }
    }

    pub fn save(&self, session: &PracticeSession) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
