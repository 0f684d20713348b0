//! Connections engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::config::{ConnectionsConfig, Group, GROUP_SIZE};
use crate::core::{GameId, GameRng};
use crate::rules::{Outcome, PuzzleEngine};
use crate::storage::{CompletionRegistry, PersistentGameState, SharedStore};

/// Persisted Connections progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsState {
    /// Unsolved words in display order.
    pub words: Vec<String>,
    /// Current selection, in click order.
    pub selected: Vec<String>,
    /// Groups found so far, in the order they were found.
    pub solved_groups: Vec<Group>,
    pub mistakes: u32,
    pub game_over: bool,
}

impl ConnectionsState {
    /// Fresh board: every word, shuffled.
    #[must_use]
    pub fn new(config: &ConnectionsConfig, rng: &mut GameRng) -> Self {
        let mut words: Vec<String> = config.all_words().cloned().collect();
        rng.shuffle(&mut words);
        Self {
            words,
            selected: Vec::new(),
            solved_groups: Vec::new(),
            mistakes: 0,
            game_over: false,
        }
    }

    /// Check the snapshot partitions `config`'s words correctly.
    ///
    /// Remaining words plus solved groups must cover every word exactly
    /// once, and the selection must be drawn from the remaining words.
    #[must_use]
    pub fn fits(&self, config: &ConnectionsConfig) -> bool {
        let solved_ok = self.solved_groups.iter().all(|g| config.groups.contains(g));

        let mut covered: Vec<&String> = self
            .words
            .iter()
            .chain(self.solved_groups.iter().flat_map(|g| g.words.iter()))
            .collect();
        let mut expected: Vec<&String> = config.all_words().collect();
        covered.sort();
        expected.sort();

        solved_ok
            && covered == expected
            && self.selected.len() <= GROUP_SIZE
            && self.selected.iter().all(|w| self.words.contains(w))
            && self.mistakes <= config.max_mistakes
    }
}

/// Connections: sort sixteen words into four hidden groups.
///
/// ## Rules
///
/// - Select up to four words; a fifth selection is ignored
/// - Submitting four words that form a group solves it
/// - Any other four-word submission costs a mistake
/// - Four solved groups wins; running out of mistakes loses
#[derive(Debug)]
pub struct Connections {
    config: ConnectionsConfig,
    state: ConnectionsState,
    rng: GameRng,
    persistence: PersistentGameState<ConnectionsState>,
    registry: CompletionRegistry,
}

impl Connections {
    /// Restore the game from `store`, or deal a fresh shuffled board.
    #[instrument(skip_all, fields(seed = rng.seed()))]
    pub fn load(config: ConnectionsConfig, store: &SharedStore, mut rng: GameRng) -> Self {
        let persistence = PersistentGameState::new(GameId::Connections.storage_key(), store.clone());
        let state = persistence.load(|| ConnectionsState::new(&config, &mut rng), |s| s.fits(&config));
        Self {
            config,
            state,
            rng,
            persistence,
            registry: CompletionRegistry::new(store.clone()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ConnectionsState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ConnectionsConfig {
        &self.config
    }

    /// Check if `word` is currently selected.
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.state.selected.iter().any(|w| w == word)
    }

    /// Mistakes left before the game ends.
    #[must_use]
    pub fn mistakes_remaining(&self) -> u32 {
        self.config.max_mistakes.saturating_sub(self.state.mistakes)
    }

    /// Select or deselect a word.
    #[instrument(skip(self))]
    pub fn toggle_word(&mut self, word: &str) {
        if self.state.game_over {
            debug!("game over, ignoring toggle");
            return;
        }

        if let Some(index) = self.state.selected.iter().position(|w| w == word) {
            self.state.selected.remove(index);
        } else if self.state.selected.len() < GROUP_SIZE && self.state.words.iter().any(|w| w == word) {
            self.state.selected.push(word.to_string());
        } else {
            debug!(selected = self.state.selected.len(), "ignoring toggle");
            return;
        }
        self.persistence.save(&self.state);
    }

    /// Submit the current four-word selection.
    #[instrument(skip(self), fields(selected = ?self.state.selected))]
    pub fn submit_guess(&mut self) {
        if self.state.game_over || self.state.selected.len() != GROUP_SIZE {
            debug!("selection incomplete, ignoring submit");
            return;
        }

        let found = self
            .config
            .groups
            .iter()
            .find(|g| g.matches(&self.state.selected))
            .cloned();
        self.state.selected.clear();

        match found {
            Some(group) => {
                self.state.words.retain(|w| !group.contains(w));
                info!(category = %group.category, "group solved");
                self.state.solved_groups.push(group);
                if self.state.solved_groups.len() == self.config.groups.len() {
                    self.state.game_over = true;
                    info!(mistakes = self.state.mistakes, "all groups solved");
                    self.registry.mark_complete(GameId::Connections);
                }
            }
            None => {
                self.state.mistakes += 1;
                debug!(mistakes = self.state.mistakes, "not a group");
                if self.state.mistakes >= self.config.max_mistakes {
                    self.state.game_over = true;
                    info!(solved = self.state.solved_groups.len(), "out of mistakes");
                }
            }
        }
        self.persistence.save(&self.state);
    }

    /// Reorder the remaining words uniformly at random.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.state.words);
        self.persistence.save(&self.state);
    }
}

impl PuzzleEngine for Connections {
    fn id(&self) -> GameId {
        GameId::Connections
    }

    fn outcome(&self) -> Outcome {
        if !self.state.game_over {
            Outcome::InProgress
        } else if self.state.solved_groups.len() == self.config.groups.len() {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.state = ConnectionsState::new(&self.config, &mut self.rng);
        self.persistence.save(&self.state);
        self.registry.unmark(GameId::Connections);
        info!("connections reset");
    }
}
