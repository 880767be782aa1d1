//! Session store module
//!
//! This module is the single source of truth for "is a user currently
//! authenticated, and with what token". The token itself lives in memory
//! only; the remember-me flag and identity marker are persisted as a JSON
//! file in the per-user data directory and removed again on logout.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during session store operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// A credential was supplied without a token
    #[error("Refusing to store a credential with an empty token")]
    EmptyToken,

    /// Failed to determine the per-user data directory location
    #[error("Failed to determine session data directory location")]
    DataDirectoryNotFound,

    /// Failed to create or access the session data directory
    #[error("Failed to create session directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the persisted session markers
    #[error("Failed to read session file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the persisted session markers
    #[error("Failed to write session file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove the persisted session markers
    #[error("Failed to remove session file {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize the persisted session markers
    #[error("Failed to deserialize session file {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize the session markers for persistence
    #[error("Failed to serialize session markers: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// An authenticated session credential
///
/// The token is opaque to this crate; it is sent verbatim in the
/// `Authorization` header of directory requests. The identity marker is
/// whatever the login surface wants remembered across runs (typically the
/// signed-in email) and is only persisted when `remember_me` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Opaque bearer token identifying the session
    pub token: String,
    /// Whether the identity marker should be persisted across runs
    pub remember_me: bool,
    /// Identity marker to remember (e.g. the signed-in email)
    pub identity: Option<String>,
}

impl Credential {
    /// Creates a credential that is held in memory only
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            remember_me: false,
            identity: None,
        }
    }

    /// Creates a credential whose identity marker is persisted across runs
    pub fn remembered(token: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            remember_me: true,
            identity: Some(identity.into()),
        }
    }
}

/// The markers persisted across runs when "remember me" is active
///
/// Deliberately excludes the token: the secure credential store of the
/// original client is disabled, so only the flag and the identity marker
/// ever touch disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedProfile {
    /// Whether the user asked to be remembered
    pub remember_me: bool,
    /// The remembered identity marker, if any
    pub identity: Option<String>,
}

/// Single source of truth for the active session credential
///
/// Holds the current credential in memory for the process lifetime and
/// manages the persisted remember-me markers on disk. Components needing
/// authentication receive this store (or the credential read from it)
/// explicitly; there is no ambient process-wide session state.
pub struct SessionStore {
    /// The active in-memory credential, if any
    credential: Option<Credential>,
    /// Directory holding the persisted session markers
    data_dir: PathBuf,
}

const SESSION_FILE: &str = "session.json";

impl SessionStore {
    /// Opens the session store backed by the per-user data directory
    ///
    /// The directory is created if it does not exist. Any markers persisted
    /// by a previous run stay on disk untouched until `clear_credential`.
    pub fn open() -> Result<Self, SessionError> {
        let proj_dirs = directories::ProjectDirs::from("academy", "infinum", "showshelf")
            .ok_or(SessionError::DataDirectoryNotFound)?;

        Self::open_at(proj_dirs.data_dir().to_path_buf())
    }

    /// Opens the session store against an explicit directory
    pub fn open_at(data_dir: PathBuf) -> Result<Self, SessionError> {
        fs::create_dir_all(&data_dir).map_err(|e| SessionError::DirectoryCreationFailed {
            path: data_dir.clone(),
            source: e,
        })?;

        Ok(Self {
            credential: None,
            data_dir,
        })
    }

    /// Stores the credential for the active session
    ///
    /// Rejects an empty token: callers must never be able to issue an
    /// authenticated request without one. When the credential asks to be
    /// remembered, the remember-me markers are written to disk; the token
    /// itself is not.
    pub fn set_credential(&mut self, credential: Credential) -> Result<(), SessionError> {
        if credential.token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        if credential.remember_me {
            self.write_profile(&RememberedProfile {
                remember_me: true,
                identity: credential.identity.clone(),
            })?;
        }

        self.credential = Some(credential);
        Ok(())
    }

    /// Returns the active credential, or `None` if no user is signed in
    pub fn current_credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Clears the in-memory credential and removes any persisted markers
    ///
    /// Idempotent: clearing an already-empty store is a no-op. Requests
    /// already in flight with a clone of the old credential are unaffected.
    pub fn clear_credential(&mut self) -> Result<(), SessionError> {
        self.credential = None;

        let path = self.session_file();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| SessionError::RemoveFailed {
                path: path.clone(),
                source: e,
            })?;
        }

        log::debug!("session cleared, remember-me markers removed");
        Ok(())
    }

    /// Reads the persisted remember-me markers back, if any
    ///
    /// Used by the login surface to pre-fill the remembered identity on the
    /// next run. Returns `None` when nothing was persisted.
    pub fn remembered_profile(&self) -> Result<Option<RememberedProfile>, SessionError> {
        let path = self.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| SessionError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;

        let profile =
            serde_json::from_str(&content).map_err(|e| SessionError::DeserializationFailed {
                path,
                source: e,
            })?;

        Ok(Some(profile))
    }

    fn write_profile(&self, profile: &RememberedProfile) -> Result<(), SessionError> {
        let path = self.session_file();
        let content = serde_json::to_string_pretty(profile)?;

        fs::write(&path, content).map_err(|e| SessionError::WriteFailed { path, source: e })
    }

    fn session_file(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}
