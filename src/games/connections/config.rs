//! Connections puzzle configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Words per group, and the selection cap.
pub const GROUP_SIZE: usize = 4;

/// Groups per puzzle.
pub const GROUP_COUNT: usize = 4;

/// Display colour of a group, easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

/// One category of four words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub words: Vec<String>,
    pub category: String,
    pub color: GroupColor,
}

impl Group {
    /// Create a group.
    pub fn new<I, S>(category: impl Into<String>, color: GroupColor, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            category: category.into(),
            color,
        }
    }

    /// Check if `word` belongs to this group.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// True if `selection` is exactly this group's words, in any order.
    ///
    /// Both directions are checked, so a selection with a repeated word
    /// never matches.
    #[must_use]
    pub fn matches(&self, selection: &[String]) -> bool {
        selection.iter().all(|w| self.contains(w)) && self.words.iter().all(|w| selection.contains(w))
    }
}

/// Connections puzzle definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionsConfig {
    /// Exactly four disjoint groups of four words.
    pub groups: Vec<Group>,

    /// Wrong submissions allowed before the game ends (default: 4).
    pub max_mistakes: u32,
}

impl Default for ConnectionsConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                Group::new("PETS", GroupColor::Yellow, ["DOG", "CAT", "BIRD", "FISH"]),
                Group::new("COLORS", GroupColor::Green, ["RED", "BLUE", "GREEN", "PURPLE"]),
                Group::new(
                    "TECH COMPANIES",
                    GroupColor::Blue,
                    ["APPLE", "GOOGLE", "MICROSOFT", "AMAZON"],
                ),
                Group::new("SEASONS", GroupColor::Purple, ["SPRING", "SUMMER", "FALL", "WINTER"]),
            ],
            max_mistakes: 4,
        }
    }
}

impl ConnectionsConfig {
    /// Use different groups.
    #[must_use]
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// Use a different mistake budget.
    #[must_use]
    pub fn with_max_mistakes(mut self, max: u32) -> Self {
        self.max_mistakes = max;
        self
    }

    /// Every word of every group, in group order.
    pub fn all_words(&self) -> impl Iterator<Item = &String> {
        self.groups.iter().flat_map(|g| g.words.iter())
    }

    /// The group containing `word`, if any.
    #[must_use]
    pub fn group_of(&self, word: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(word))
    }

    /// Check there are four groups of four distinct, non-empty words.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.len() != GROUP_COUNT {
            return Err(ConfigError::new(format!(
                "connections needs {GROUP_COUNT} groups, got {}",
                self.groups.len()
            )));
        }
        if let Some(group) = self.groups.iter().find(|g| g.words.len() != GROUP_SIZE) {
            return Err(ConfigError::new(format!(
                "group {:?} needs {GROUP_SIZE} words, got {}",
                group.category,
                group.words.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for word in self.all_words() {
            if word.is_empty() {
                return Err(ConfigError::new("connections words must not be empty"));
            }
            if !seen.insert(word.as_str()) {
                return Err(ConfigError::new(format!("word {word:?} appears in more than one slot")));
            }
        }

        if self.max_mistakes == 0 {
            return Err(ConfigError::new("connections needs a mistake budget of at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_is_valid() {
        let config = ConnectionsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.all_words().count(), 16);
        assert_eq!(config.group_of("FALL").unwrap().category, "SEASONS");
        assert!(config.group_of("ZEBRA").is_none());
    }

    #[test]
    fn test_group_matches_is_set_equality() {
        let pets = &ConnectionsConfig::default().groups[0];
        assert!(pets.matches(&words(&["FISH", "DOG", "BIRD", "CAT"])));
        assert!(!pets.matches(&words(&["FISH", "DOG", "BIRD", "RED"])));
        assert!(!pets.matches(&words(&["FISH", "DOG", "BIRD", "BIRD"])));
        assert!(!pets.matches(&words(&["FISH", "DOG", "BIRD"])));
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let mut config = ConnectionsConfig::default();
        config.groups[1].words[0] = "DOG".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_shape() {
        let mut config = ConnectionsConfig::default();
        config.groups.pop();
        assert!(config.validate().is_err());

        let mut config = ConnectionsConfig::default();
        config.groups[2].words.pop();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&GroupColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }
}
