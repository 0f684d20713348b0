//! Game identifiers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifies one of the puzzles in the arcade.
///
/// The lowercase string form (`"wordle"`, ...) is what the completion
/// registry persists.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameId {
    Wordle,
    Connections,
    Strands,
    Crossword,
}

impl GameId {
    /// All games in menu order.
    pub fn all() -> impl Iterator<Item = GameId> {
        GameId::iter()
    }

    /// Name shown on the menu.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GameId::Wordle => "Wordle",
            GameId::Connections => "Connections",
            GameId::Strands => "Strands",
            GameId::Crossword => "Crossword",
        }
    }

    /// Storage key holding this game's snapshot.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            GameId::Wordle => "wordle-game-state",
            GameId::Connections => "connections-game-state",
            GameId::Strands => "strands-game-state",
            GameId::Crossword => "crossword-game-state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        assert_eq!(GameId::Wordle.to_string(), "wordle");
        assert_eq!(GameId::Crossword.as_ref(), "crossword");
        assert_eq!("strands".parse::<GameId>(), Ok(GameId::Strands));
        assert!("chess".parse::<GameId>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for id in GameId::all() {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{id}\""));
        }
    }

    #[test]
    fn test_menu_order_and_keys() {
        let names: Vec<_> = GameId::all().map(GameId::display_name).collect();
        assert_eq!(names, ["Wordle", "Connections", "Strands", "Crossword"]);
        assert_eq!(GameId::Strands.storage_key(), "strands-game-state");
    }
}
