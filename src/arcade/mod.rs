//! Arcade hub and its configuration.
//!
//! The hub is what a menu shell talks to: it lists the games with their
//! completion badges, hands out the engines, and performs resets.

pub mod config;
pub mod hub;

pub use config::ArcadeConfig;
pub use hub::{Arcade, MenuEntry};
