/// Shows API wire types for serialization.
///
/// These structures mirror the JSON request and response formats of the
/// remote shows API.
use super::Show;
use serde::{Deserialize, Serialize};

/// The envelope wrapping the show list response.
#[derive(Debug, Deserialize)]
pub(super) struct ShowsEnvelope {
    /// The shows visible to the authenticated user, in display order
    pub data: Vec<Show>,
}

/// Request body for registering a new episode.
///
/// Field names follow the API's camelCase convention; the numeric draft
/// fields travel as decimal strings, which is what the API accepts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewEpisodeBody<'a> {
    pub show_id: &'a str,
    pub media_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub episode_number: String,
    pub season: String,
}
