//! Showshelf - Browse your TV show directory and register new episodes
//!
//! This library provides the core functionality for holding an authenticated
//! session, fetching the signed-in user's show list from the remote shows
//! API, and submitting new episodes for a show.

mod episode_entry;
mod session;
mod show_directory;
mod show_list;

use thiserror::Error;

// Re-export error types
pub use session::SessionError;
pub use show_directory::DirectoryError;

pub use episode_entry::{EpisodeDraft, EpisodeForm, FormState};
pub use session::{Credential, RememberedProfile, SessionStore};
pub use show_directory::{HttpShowDirectory, Show, ShowDirectory};
pub use show_list::ShowListState;

/// Top-level error type for Showshelf operations
#[derive(Debug, Error)]
pub enum ShowshelfError {
    /// Error in the session store
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error talking to the show directory
    #[error("Show directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Loads the show list for the currently signed-in user
///
/// This is the "show my shows" entry point: it reads the active credential
/// from the session store and fetches the user's shows through the given
/// directory backend. With no credential set it fails with
/// [`DirectoryError::Unauthenticated`] before the backend is consulted at
/// all, so no request can ever leave without a token.
///
/// # Returns
///
/// The shows in the order the server returned them.
///
/// # Examples
///
/// ```no_run
/// use showshelf::{load_show_list, Credential, HttpShowDirectory, SessionStore};
///
/// let mut store = SessionStore::open().unwrap();
/// store.set_credential(Credential::new("token")).unwrap();
///
/// let directory = HttpShowDirectory::new();
/// let shows = load_show_list(&store, &directory).unwrap();
/// for show in &shows {
///     println!("{}", show.title);
/// }
/// ```
pub fn load_show_list(
    store: &SessionStore,
    directory: &impl ShowDirectory,
) -> Result<Vec<Show>, DirectoryError> {
    let credential = store
        .current_credential()
        .ok_or(DirectoryError::Unauthenticated)?;

    directory.fetch_shows(credential)
}

/// Submits a new episode for the given show as the signed-in user
///
/// Same authentication precondition as [`load_show_list`]. Success is an
/// acknowledgement only; on failure the draft the caller holds is left
/// untouched so the user can correct and retry.
pub fn add_episode(
    store: &SessionStore,
    directory: &impl ShowDirectory,
    show_id: &str,
    draft: &EpisodeDraft,
) -> Result<(), DirectoryError> {
    let credential = store
        .current_credential()
        .ok_or(DirectoryError::Unauthenticated)?;

    directory.submit_episode(credential, show_id, draft)
}

/// Signs the current user out
///
/// Clears the in-memory credential and removes the persisted remember-me
/// markers. Idempotent, like the store operation it wraps.
pub fn logout(store: &mut SessionStore) -> Result<(), SessionError> {
    store.clear_credential()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Directory fake that records whether it was consulted
    struct RecordingDirectory {
        called: Cell<bool>,
    }

    impl RecordingDirectory {
        fn new() -> Self {
            Self {
                called: Cell::new(false),
            }
        }
    }

    impl ShowDirectory for RecordingDirectory {
        fn fetch_shows(&self, _credential: &Credential) -> Result<Vec<Show>, DirectoryError> {
            self.called.set(true);
            Ok(vec![Show {
                id: "1".to_string(),
                title: "Show A".to_string(),
                description: None,
                image_url: None,
            }])
        }

        fn submit_episode(
            &self,
            _credential: &Credential,
            _show_id: &str,
            _draft: &EpisodeDraft,
        ) -> Result<(), DirectoryError> {
            self.called.set(true);
            Ok(())
        }
    }

    fn temp_store() -> SessionStore {
        let dir = std::env::temp_dir().join(format!("showshelf_lib_{}", ulid::Ulid::new()));
        SessionStore::open_at(dir).unwrap()
    }

    fn draft() -> EpisodeDraft {
        EpisodeDraft {
            title: "Pilot".to_string(),
            description: "The one that starts it all".to_string(),
            season: 1,
            episode_number: 1,
            media_id: "media-9".to_string(),
        }
    }

    #[test]
    fn test_load_show_list_without_credential_skips_directory() {
        let store = temp_store();
        let directory = RecordingDirectory::new();

        let result = load_show_list(&store, &directory);

        assert!(matches!(result, Err(DirectoryError::Unauthenticated)));
        assert!(!directory.called.get());
    }

    #[test]
    fn test_load_show_list_with_credential_delegates() {
        let mut store = temp_store();
        store.set_credential(Credential::new("token")).unwrap();
        let directory = RecordingDirectory::new();

        let shows = load_show_list(&store, &directory).unwrap();

        assert_eq!(shows[0].title, "Show A");
        assert!(directory.called.get());
    }

    #[test]
    fn test_add_episode_without_credential_skips_directory() {
        let store = temp_store();
        let directory = RecordingDirectory::new();

        let result = add_episode(&store, &directory, "42", &draft());

        assert!(matches!(result, Err(DirectoryError::Unauthenticated)));
        assert!(!directory.called.get());
    }

    #[test]
    fn test_add_episode_leaves_credential_untouched() {
        let mut store = temp_store();
        store.set_credential(Credential::new("token")).unwrap();
        let directory = RecordingDirectory::new();

        add_episode(&store, &directory, "42", &draft()).unwrap();

        assert_eq!(store.current_credential().unwrap().token, "token");
    }

    #[test]
    fn test_logout_clears_store() {
        let mut store = temp_store();
        store.set_credential(Credential::new("token")).unwrap();

        logout(&mut store).unwrap();
        logout(&mut store).unwrap();

        assert!(store.current_credential().is_none());
    }
}
