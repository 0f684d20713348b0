//! # puzzle-arcade
//!
//! Four daily-style word puzzles with local persistence and a shared
//! completion registry.
//!
//! ## Design Principles
//!
//! 1. **Independent Engines**: Wordle, Connections, Strands and Crossword
//!    never talk to each other. They share only the store and the
//!    completion registry.
//!
//! 2. **Load, Mutate, Persist**: Every accepted input is saved before the
//!    call returns. A bad or missing snapshot starts that game fresh.
//!
//! 3. **Configuration Over Convention**: Puzzles come from config structs
//!    with built-in defaults, loadable from TOML.
//!
//! ## Modules
//!
//! - `core`: Game ids, grid cells, RNG
//! - `error`: Store and configuration errors
//! - `storage`: Key-value stores, snapshot persistence, completion registry
//! - `rules`: `PuzzleEngine` trait shared by the games
//! - `games`: The four puzzle engines
//! - `arcade`: Menu hub that owns the engines

pub mod core;
pub mod error;
pub mod storage;
pub mod rules;
pub mod games;
pub mod arcade;

// Re-export commonly used types
pub use crate::core::{Cell, GameId, GameRng};

pub use crate::error::{ConfigError, StoreError};

pub use crate::storage::{
    CompletionRegistry, FileStore, KeyValueStore, MemoryStore,
    PersistentGameState, SharedStore,
};

pub use crate::rules::{Outcome, PuzzleEngine};

pub use crate::games::{
    Connections, ConnectionsConfig, Crossword, CrosswordConfig,
    Strands, StrandsConfig, Wordle, WordleConfig,
};

pub use crate::arcade::{Arcade, ArcadeConfig, MenuEntry};
