//! Persistence: the store contract, typed snapshots, and the completion
//! registry.
//!
//! Every engine follows the same shape: load its snapshot (falling back to
//! a fresh game), mutate on input, save after each mutation, and mark the
//! registry on a win.

pub mod store;
pub mod persistent;
pub mod registry;

pub use store::{FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use persistent::PersistentGameState;
pub use registry::{CompletionRegistry, COMPLETED_GAMES_KEY};
