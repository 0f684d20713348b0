//! Arcade configuration: the four puzzles and the shuffle seed.
//!
//! Everything has a default, so a TOML file only needs the parts it
//! changes:
//!
//! ```
//! use puzzle_arcade::arcade::ArcadeConfig;
//!
//! let config = ArcadeConfig::from_toml_str(r#"
//!     seed = 7
//!
//!     [wordle]
//!     solution = "CRANE"
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.wordle.solution, "CRANE");
//! assert_eq!(config.strands.spangram, "THEME");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::games::{ConnectionsConfig, CrosswordConfig, StrandsConfig, WordleConfig};

/// Complete arcade configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Seed for word shuffles. `None` seeds from the operating system.
    pub seed: Option<u64>,

    pub wordle: WordleConfig,
    pub connections: ConnectionsConfig,
    pub strands: StrandsConfig,
    pub crossword: CrosswordConfig,
}

impl ArcadeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_wordle(mut self, wordle: WordleConfig) -> Self {
        self.wordle = wordle;
        self
    }

    #[must_use]
    pub fn with_connections(mut self, connections: ConnectionsConfig) -> Self {
        self.connections = connections;
        self
    }

    #[must_use]
    pub fn with_strands(mut self, strands: StrandsConfig) -> Self {
        self.strands = strands;
        self
    }

    #[must_use]
    pub fn with_crossword(mut self, crossword: CrosswordConfig) -> Self {
        self.crossword = crossword;
        self
    }

    /// Validate every puzzle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wordle.validate()?;
        self.connections.validate()?;
        self.strands.validate()?;
        self.crossword.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArcadeConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArcadeConfig::default()
            .with_seed(123)
            .with_wordle(WordleConfig::default().with_solution("crane"));

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.wordle.solution, "CRANE");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ArcadeConfig::default().with_seed(9);
        let text = toml::to_string(&config).unwrap();
        let parsed = ArcadeConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_with_clues() {
        let config = ArcadeConfig::from_toml_str(
            r#"
            [crossword]
            solution = ["AB", "C#"]
            across = [{ number = 1, start = "0-0", text = "First two" }]
            down = [{ number = 1, start = "0-0", text = "Down one" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.crossword.size(), 2);
    }

    #[test]
    fn test_invalid_puzzle_rejected() {
        let err = ArcadeConfig::from_toml_str(
            r#"
            [strands]
            spangram = "NOPE"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("spangram"));

        assert!(ArcadeConfig::from_toml_str("seed = \"x\"").is_err());
    }
}
