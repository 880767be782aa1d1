//! Show list screen state module
//!
//! This module owns the list of shows a screen is displaying and applies
//! fetch results to it. The screen replaces its list wholesale on every
//! successful fetch and keeps whatever it had on a failed one. A closed
//! screen discards every late-arriving result, standing in for the weak
//! reference the original delegate wiring relied on.

use crate::show_directory::{DirectoryError, Show};

/// Displayed state of the show list screen
///
/// Plain `&mut` data: delivery of fetch results onto the thread owning
/// this value is the caller's concern. Overlapping fetches are not
/// coordinated; each outcome is applied as it arrives and the last one
/// applied wins.
#[derive(Debug, Default)]
pub struct ShowListState {
    shows: Vec<Show>,
    closed: bool,
}

impl ShowListState {
    /// Creates an empty, open screen state
    pub fn new() -> Self {
        Self::default()
    }

    /// The shows currently displayed, in server order
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Whether the screen has been torn down
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Tears the screen down
    ///
    /// Fetches still in flight are simply abandoned; their eventual
    /// outcome is discarded by `apply_fetch`.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Applies the outcome of a fetch to the displayed list
    ///
    /// A successful fetch replaces the list wholesale; a failed one leaves
    /// the previous list untouched (the screen stays on its empty or stale
    /// list). Returns whether the displayed list changed.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<Show>, DirectoryError>) -> bool {
        if self.closed {
            log::debug!("discarding fetch result for a closed screen");
            return false;
        }

        match outcome {
            Ok(shows) => {
                self.shows = shows;
                true
            }
            Err(e) => {
                log::warn!("show list fetch failed: {}", e);
                false
            }
        }
    }
}
