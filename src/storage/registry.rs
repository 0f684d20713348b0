//! Completion registry: which puzzles have been won.
//!
//! The registry is the only state shared between engines. It lives in the
//! store under `completed-games` as a JSON list of game id strings, and
//! every call reads through to the store so that handles cloned into
//! different engines never disagree.

use tracing::{info, instrument, warn};

use super::store::SharedStore;
use crate::core::GameId;
use crate::error::StoreError;

/// Storage key of the completion list.
pub const COMPLETED_GAMES_KEY: &str = "completed-games";

/// Set of completed games, persisted as an ordered list without duplicates.
#[derive(Clone, Debug)]
pub struct CompletionRegistry {
    store: SharedStore,
}

impl CompletionRegistry {
    /// Create a registry over `store`.
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Completed games in the order they were first completed.
    ///
    /// Unreadable data reads as empty. Unknown ids are skipped and repeats
    /// collapse to their first occurrence.
    #[must_use]
    pub fn completed(&self) -> Vec<GameId> {
        let raw = match self.store.get(COMPLETED_GAMES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not read completion registry");
                return Vec::new();
            }
        };

        let names: Vec<String> = match serde_json::from_str(&raw) {
            Ok(names) => names,
            Err(err) => {
                warn!(error = %err, "malformed completion registry, treating as empty");
                return Vec::new();
            }
        };

        let mut ids = Vec::with_capacity(names.len());
        for id in names.iter().filter_map(|name| name.parse::<GameId>().ok()) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Check if a game is marked complete.
    #[must_use]
    pub fn is_complete(&self, id: GameId) -> bool {
        self.completed().contains(&id)
    }

    /// Mark a game complete. Idempotent.
    #[instrument(skip(self))]
    pub fn mark_complete(&self, id: GameId) {
        let mut ids = self.completed();
        if ids.contains(&id) {
            return;
        }
        ids.push(id);
        info!(game = %id, "marked complete");
        self.write(&ids);
    }

    /// Remove one game's completion, leaving the others untouched.
    #[instrument(skip(self))]
    pub fn unmark(&self, id: GameId) {
        let mut ids = self.completed();
        let before = ids.len();
        ids.retain(|&other| other != id);
        if ids.len() != before {
            self.write(&ids);
        }
    }

    /// Forget every completion.
    #[instrument(skip(self))]
    pub fn reset_all(&self) {
        if let Err(err) = self.store.remove(COMPLETED_GAMES_KEY) {
            warn!(error = %err, "could not clear completion registry");
        }
    }

    fn write(&self, ids: &[GameId]) {
        let names: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        let result = serde_json::to_string(&names)
            .map_err(StoreError::from)
            .and_then(|raw| self.store.set(COMPLETED_GAMES_KEY, &raw));
        if let Err(err) = result {
            warn!(error = %err, "could not save completion registry");
        }
    }
}
