/**
 * Client Session Store
 *
 * Persists the `{token, profile}` pair between client runs as a JSON
 * file. Corruption-recovery policy: anything that cannot be parsed back
 * is treated as absent and the file is removed, so a half-written or
 * tampered session can never wedge the client - the user just logs in
 * again.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::handlers::types::ProfileResponse;

/// A logged-in session: the bearer token and the profile it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub profile: ProfileResponse,
}

/// File-backed session persistence
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform's per-user data directory
    pub fn at_default_path() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("feedline").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any
    ///
    /// Returns `None` when the file is missing or unreadable. A file
    /// that exists but does not parse is deleted before returning
    /// `None`.
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding corrupt session file: {e}");
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    /// Persist a session, creating parent directories as needed
    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)
    }

    /// Remove the persisted session; absence is not an error
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
