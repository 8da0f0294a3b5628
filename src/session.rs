//! Session storage for registry authentication.
//!
//! This module persists the access token obtained at login and resolves
//! the token the sync driver uses before any upload.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Environment variable that overrides any stored token.
pub const TOKEN_ENV: &str = "ATELIER_TOKEN";

/// Session data structure stored in session.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Authentication session store
///
/// Manages session persistence in ~/.atelier/session.json (or a custom
/// config directory).
pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    /// Create a new session store
    ///
    /// # Arguments
    /// * `config_dir` - Optional custom config directory. Defaults to ~/.atelier
    pub fn new(config_dir: Option<String>) -> Result<Self> {
        let base_dir = match config_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".atelier"),
        };

        Ok(Self {
            session_path: base_dir.join("session.json"),
        })
    }

    /// Get the session file path
    pub fn session_path(&self) -> &PathBuf {
        &self.session_path
    }

    /// Check if a session is stored on disk
    pub fn is_logged_in(&self) -> bool {
        matches!(self.get_session(), Ok(Some(_)))
    }

    /// Parse session data from JSON string
    fn parse_session_from_string(raw: &str) -> Option<SessionData> {
        match serde_json::from_str::<SessionData>(raw) {
            Ok(session) => {
                if session.access_token.is_empty() {
                    warn!("Session validation failed: empty access token");
                    return None;
                }
                Some(session)
            }
            Err(e) => {
                warn!("Failed to parse session JSON: {}", e);
                None
            }
        }
    }

    /// Get the session stored in the session file, if any
    ///
    /// Unparseable content reads as `None`. The file is never modified
    /// here; invalid sessions are cleaned up by the status command.
    pub fn get_session(&self) -> Result<Option<SessionData>> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.session_path)
            .with_context(|| format!("Failed to read session file: {:?}", self.session_path))?;

        Ok(Self::parse_session_from_string(&content))
    }

    /// Save a new session
    pub fn save_session(&self, access_token: &str, user: Option<&str>) -> Result<()> {
        let session = SessionData {
            access_token: access_token.to_string(),
            user: user.map(ToOwned::to_owned),
        };

        let content =
            serde_json::to_string_pretty(&session).context("Failed to serialize session data")?;

        if let Some(parent) = self.session_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(&self.session_path, content)
            .with_context(|| format!("Failed to write session file: {:?}", self.session_path))?;

        info!("Session saved successfully");
        debug!("Session saved to {:?}", self.session_path);

        Ok(())
    }

    /// Remove the current session
    pub fn remove_session(&self) -> Result<()> {
        if self.session_path.exists() {
            std::fs::remove_file(&self.session_path).with_context(|| {
                format!("Failed to remove session file: {:?}", self.session_path)
            })?;
        }

        info!("Session removed successfully");

        Ok(())
    }
}

/// Resolve the access token for registry calls, if any.
///
/// Priority:
/// 1. ATELIER_TOKEN environment variable
/// 2. ~/.atelier/session.json
///
/// Absence is an ordinary answer here, not an error: the sync driver
/// treats it as "nothing to sync".
pub fn prepare_token() -> Result<Option<String>> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.is_empty() {
            debug!("Using access token from {}", TOKEN_ENV);
            return Ok(Some(token));
        }
    }

    let store = SessionStore::new(None)?;
    Ok(store.get_session()?.map(|session| session.access_token))
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(Some(dir.path().to_string_lossy().to_string())).unwrap()
    }

    /// Saves and restores the variables `prepare_token` resolution reads.
    struct EnvGuard {
        token: Option<String>,
        home: Option<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let guard = Self {
                token: std::env::var(TOKEN_ENV).ok(),
                home: std::env::var("HOME").ok(),
            };
            std::env::remove_var(TOKEN_ENV);
            guard
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.token {
                Some(value) => std::env::set_var(TOKEN_ENV, value),
                None => std::env::remove_var(TOKEN_ENV),
            }
            match &self.home {
                Some(value) => std::env::set_var("HOME", value),
                None => std::env::remove_var("HOME"),
            }
        }
    }

    #[test]
    fn test_session_store_new() {
        let tmp = tempdir().unwrap();
        let store = store_in(&tmp);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_session_save_and_load() {
        let tmp = tempdir().unwrap();
        let store = store_in(&tmp);

        store.save_session("test_token", Some("rax")).unwrap();

        let session = store.get_session().unwrap().unwrap();
        assert_eq!(session.access_token, "test_token");
        assert_eq!(session.user.as_deref(), Some("rax"));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_session_remove() {
        let tmp = tempdir().unwrap();
        let store = store_in(&tmp);

        store.save_session("test_token", None).unwrap();
        assert!(store.session_path().exists());

        store.remove_session().unwrap();
        assert!(!store.session_path().exists());
    }

    #[test]
    fn test_invalid_session_reads_as_none() {
        let tmp = tempdir().unwrap();
        let store = store_in(&tmp);

        std::fs::write(store.session_path(), r#"{"accessToken": ""}"#).unwrap();

        assert!(store.get_session().unwrap().is_none());
        assert!(!store.is_logged_in());
        // Reading must not delete the file
        assert!(store.session_path().exists());
    }

    #[test]
    fn test_session_file_uses_camel_case() {
        let tmp = tempdir().unwrap();
        let store = store_in(&tmp);

        store.save_session("test_token", None).unwrap();

        let raw = std::fs::read_to_string(store.session_path()).unwrap();
        assert!(raw.contains("accessToken"));
    }

    #[test]
    fn test_prepare_token_prefers_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new();

        let home = tempdir().unwrap();
        std::env::set_var("HOME", home.path());
        SessionStore::new(None)
            .unwrap()
            .save_session("stored_token", None)
            .unwrap();

        std::env::set_var(TOKEN_ENV, "env_token");

        assert_eq!(prepare_token().unwrap().as_deref(), Some("env_token"));
    }

    #[test]
    fn test_prepare_token_falls_back_to_session_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new();

        let home = tempdir().unwrap();
        std::env::set_var("HOME", home.path());

        assert!(prepare_token().unwrap().is_none());

        SessionStore::new(None)
            .unwrap()
            .save_session("stored_token", Some("rax"))
            .unwrap();
        assert_eq!(prepare_token().unwrap().as_deref(), Some("stored_token"));

        // An empty variable does not shadow the stored session
        std::env::set_var(TOKEN_ENV, "");
        assert_eq!(prepare_token().unwrap().as_deref(), Some("stored_token"));
    }
}
