//! Persisted client session: the stored user id and bearer token, the
//! terminal equivalent of the web client's local storage entry. Written on
//! login, deleted on logout; a missing file simply means logged out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub token: String,
}

/// Where the session lives: `ROYALFX_SESSION_FILE` when set, otherwise the
/// platform config dir.
pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var("ROYALFX_SESSION_FILE") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("royalfx")
        .join("session.json")
}

pub fn save_to(path: &Path, session: &Session) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

/// Missing or unreadable file reads as logged-out.
pub fn load_from(path: &Path) -> Option<Session> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            debug!("Ignoring corrupt session file: {}", e);
            None
        }
    }
}

pub fn clear_at(path: &Path) -> Result<(), SessionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn save(session: &Session) -> Result<(), SessionError> {
    save_to(&session_path(), session)
}

pub fn load() -> Option<Session> {
    load_from(&session_path())
}

pub fn clear() -> Result<(), SessionError> {
    clear_at(&session_path())
}
