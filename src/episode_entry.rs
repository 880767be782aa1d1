//! Episode entry module
//!
//! This module provides the transient draft a user fills in when adding a
//! new episode, and the state machine of the add-episode form it belongs
//! to. Drafts are never persisted: they live for the lifetime of the form
//! and are kept editable when a submission fails so the user can retry.

use crate::show_directory::DirectoryError;

/// User-entered fields for a new episode, prior to submission
///
/// The parent show is supplied separately at submission time; the media
/// asset is referenced by the identifier the upload surface produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeDraft {
    /// Episode title
    pub title: String,
    /// Short description of the episode
    pub description: String,
    /// Season the episode belongs to
    pub season: u32,
    /// Episode number within the season
    pub episode_number: u32,
    /// Identifier of the uploaded media asset
    pub media_id: String,
}

/// The states of the add-episode form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// The user is editing the draft
    Editing,
    /// A submission is in flight
    Submitting,
    /// The form is gone, either cancelled or successfully submitted
    Dismissed,
}

/// The add-episode form: a draft plus where it is in its lifecycle
///
/// Transitions: `Editing -> Submitting -> Dismissed` on success, back to
/// `Editing` on failure (the draft stays as entered, nothing is retried
/// automatically), and `Editing -> Dismissed` directly on cancel. A
/// transition requested from the wrong state is ignored rather than
/// treated as an error.
#[derive(Debug)]
pub struct EpisodeForm {
    draft: EpisodeDraft,
    state: FormState,
}

impl EpisodeForm {
    /// Opens the form with the given draft, ready for editing
    pub fn new(draft: EpisodeDraft) -> Self {
        Self {
            draft,
            state: FormState::Editing,
        }
    }

    /// The draft as currently entered
    pub fn draft(&self) -> &EpisodeDraft {
        &self.draft
    }

    /// The current lifecycle state
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Marks the draft as submitted; only valid while editing
    ///
    /// Returns whether the transition happened, so the caller knows if it
    /// should actually issue the submission.
    pub fn begin_submission(&mut self) -> bool {
        if self.state != FormState::Editing {
            return false;
        }
        self.state = FormState::Submitting;
        true
    }

    /// Records the outcome of the in-flight submission
    ///
    /// Success dismisses the form; failure returns it to editing with the
    /// draft untouched. Outcomes arriving in any other state are ignored.
    pub fn finish_submission(&mut self, outcome: &Result<(), DirectoryError>) {
        if self.state != FormState::Submitting {
            return;
        }

        match outcome {
            Ok(()) => self.state = FormState::Dismissed,
            Err(e) => {
                log::warn!("episode submission failed: {}", e);
                self.state = FormState::Editing;
            }
        }
    }

    /// Dismisses the form without submitting; only valid while editing
    pub fn cancel(&mut self) {
        if self.state == FormState::Editing {
            self.state = FormState::Dismissed;
        }
    }
}
