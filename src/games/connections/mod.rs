//! Connections: find four groups of four among sixteen words.
//!
//! A submission matches only when the four selected words are exactly one
//! group's words. Four wrong submissions end the game.

mod config;
mod game;

pub use config::{ConnectionsConfig, Group, GroupColor, GROUP_COUNT, GROUP_SIZE};
pub use game::{Connections, ConnectionsState};
