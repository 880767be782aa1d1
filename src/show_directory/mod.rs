//! Show directory module
//!
//! This module provides structures representing the TV shows visible to an
//! authenticated user, as well as the trait for directory backends that can
//! retrieve them and accept new episode submissions.

mod api_types;
mod http;

pub use http::HttpShowDirectory;

use crate::episode_entry::EpisodeDraft;
use crate::session::Credential;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during show directory operations
///
/// The variants are non-overlapping: exactly one of them describes any
/// failed operation, and none of them is retried automatically.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No credential, or an empty token, was supplied
    #[error("Not signed in: an authenticated request requires a token")]
    Unauthenticated,

    /// Transport-level failure (connectivity, DNS, TLS, timeout)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status code
    ///
    /// The status is preserved so callers can distinguish an expired or
    /// rejected token (401/403) from a server-side problem (5xx).
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    /// The response body was not valid JSON or did not have the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

/// A TV show record returned by the directory endpoint
///
/// Immutable once fetched; display order follows the server response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Server-side identifier of the show
    pub id: String,
    /// The show title
    pub title: String,
    /// A short description, when the API provides one
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL, when the API provides one
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Trait for directory backends serving the authenticated user's shows
///
/// This is the seam between screen logic and transport: the HTTP client
/// implements it against the remote API, and tests implement it with fakes.
/// Neither operation mutates the session store; a failed call leaves every
/// piece of caller state untouched.
pub trait ShowDirectory {
    /// Fetches the list of shows visible to the authenticated user
    ///
    /// Issues a single authenticated GET against the shows endpoint. An
    /// empty token fails immediately with [`DirectoryError::Unauthenticated`]
    /// before any network I/O.
    ///
    /// # Returns
    ///
    /// The shows in the order the server returned them.
    fn fetch_shows(&self, credential: &Credential) -> Result<Vec<Show>, DirectoryError>;

    /// Submits a new episode for the given show
    ///
    /// Issues a single authenticated POST carrying the draft fields. Success
    /// is an acknowledgement only; the response body is ignored.
    fn submit_episode(
        &self,
        credential: &Credential,
        show_id: &str,
        draft: &EpisodeDraft,
    ) -> Result<(), DirectoryError>;
}
