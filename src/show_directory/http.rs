//! HTTP show directory implementation
//!
//! This module implements the ShowDirectory trait against the remote shows
//! API using a blocking reqwest client.

use super::api_types::{NewEpisodeBody, ShowsEnvelope};
use super::{DirectoryError, Show, ShowDirectory};
use crate::episode_entry::EpisodeDraft;
use crate::session::Credential;

/// Directory backend for the remote shows API.
///
/// Issues one request per operation against the configured base URL, with
/// the session token sent verbatim in the `Authorization` header. No retry
/// and no pagination: one request, one response.
pub struct HttpShowDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpShowDirectory {
    /// Creates a directory client against the production API.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: "https://api.infinum.academy".to_string(),
        }
    }

    /// Overrides the API base URL (scheme and authority, no trailing slash).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Rejects credentials that would violate the non-empty token invariant.
    fn require_token(credential: &Credential) -> Result<&str, DirectoryError> {
        if credential.token.is_empty() {
            return Err(DirectoryError::Unauthenticated);
        }
        Ok(&credential.token)
    }

    /// Maps a non-success status to the error carrying it.
    fn check_status(response: &reqwest::blocking::Response) -> Result<(), DirectoryError> {
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Http {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl Default for HttpShowDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowDirectory for HttpShowDirectory {
    fn fetch_shows(&self, credential: &Credential) -> Result<Vec<Show>, DirectoryError> {
        let token = Self::require_token(credential)?;

        let url = format!("{}/api/shows", self.base_url);
        log::debug!("requesting show list from {}", url);

        // Issue the authenticated GET
        let response = self
            .client
            .get(&url)
            .header("Authorization", token)
            .send()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        Self::check_status(&response)?;

        // A failure while streaming the body is still a transport failure
        let body = response
            .text()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let envelope: ShowsEnvelope =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

        Ok(envelope.data)
    }

    fn submit_episode(
        &self,
        credential: &Credential,
        show_id: &str,
        draft: &EpisodeDraft,
    ) -> Result<(), DirectoryError> {
        let token = Self::require_token(credential)?;

        let url = format!("{}/api/episodes", self.base_url);
        log::debug!("registering episode '{}' for show {}", draft.title, show_id);

        let body = NewEpisodeBody {
            show_id,
            media_id: &draft.media_id,
            title: &draft.title,
            description: &draft.description,
            episode_number: draft.episode_number.to_string(),
            season: draft.season.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", token)
            .json(&body)
            .send()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        Self::check_status(&response)?;

        // Acknowledgement only, the response body carries nothing we need
        Ok(())
    }
}
