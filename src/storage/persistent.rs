//! Typed snapshot persistence over one store key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, warn};

use super::store::SharedStore;
use crate::error::StoreError;

/// Loads and saves one game's snapshot as JSON under a fixed key.
///
/// Failures never reach the player:
/// - a missing, unreadable, malformed or rejected snapshot loads as the
///   default state
/// - a failed write is logged and play continues in memory
#[derive(Clone, Debug)]
pub struct PersistentGameState<T> {
    key: &'static str,
    store: SharedStore,
    _state: PhantomData<fn() -> T>,
}

impl<T> PersistentGameState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a snapshot type to a storage key.
    #[must_use]
    pub fn new(key: &'static str, store: SharedStore) -> Self {
        Self {
            key,
            store,
            _state: PhantomData,
        }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load the stored snapshot.
    ///
    /// Returns `default()` when nothing usable is stored. `validate` sees
    /// the decoded snapshot and can reject it (wrong dimensions, broken
    /// invariants).
    pub fn load<D, V>(&self, default: D, validate: V) -> T
    where
        D: FnOnce() -> T,
        V: FnOnce(&T) -> bool,
    {
        match self.try_load() {
            Ok(Some(state)) if validate(&state) => {
                debug!(key = self.key, "restored snapshot");
                state
            }
            Ok(Some(_)) => {
                warn!(key = self.key, "stored snapshot failed validation, starting fresh");
                default()
            }
            Ok(None) => default(),
            Err(err) => {
                warn!(key = self.key, error = %err, "could not read snapshot, starting fresh");
                default()
            }
        }
    }

    /// Decode the stored snapshot, surfacing errors.
    pub fn try_load(&self) -> Result<Option<T>, StoreError> {
        match self.store.get(self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Write the snapshot. Errors are logged and swallowed.
    pub fn save(&self, state: &T) {
        if let Err(err) = self.try_save(state) {
            warn!(key = self.key, error = %err, "could not save snapshot");
        }
    }

    /// Write the snapshot, surfacing errors.
    pub fn try_save(&self, state: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(state)?;
        self.store.set(self.key, &raw)
    }

    /// Drop the stored snapshot.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(self.key) {
            warn!(key = self.key, error = %err, "could not remove snapshot");
        }
    }
}
