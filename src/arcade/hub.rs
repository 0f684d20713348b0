//! The arcade hub: one engine per game over a shared store.

use tracing::{info, instrument, warn};

use super::config::ArcadeConfig;
use crate::core::{GameId, GameRng};
use crate::error::ConfigError;
use crate::games::{Connections, Crossword, Strands, Wordle};
use crate::rules::PuzzleEngine;
use crate::storage::{CompletionRegistry, SharedStore};

/// One line of the game menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: GameId,
    pub name: &'static str,
    /// Show the completion badge.
    pub completed: bool,
}

/// Owns the four engines and the completion registry.
///
/// ## Lifecycle
///
/// `open` validates the configuration and restores every game from the
/// store. Each engine persists its own snapshot; the hub only reads the
/// registry for menu badges and coordinates resets.
#[derive(Debug)]
pub struct Arcade {
    config: ArcadeConfig,
    store: SharedStore,
    registry: CompletionRegistry,
    /// Source of Connections deals. Forked once per deal.
    deals: GameRng,
    wordle: Wordle,
    connections: Connections,
    strands: Strands,
    crossword: Crossword,
}

impl Arcade {
    /// Validate `config` and load every game from `store`.
    #[instrument(skip_all, fields(seed = ?config.seed))]
    pub fn open(config: ArcadeConfig, store: SharedStore) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deals = rng.for_context("connections");

        let arcade = Self {
            wordle: Wordle::load(config.wordle.clone(), &store),
            connections: Connections::load(
                config.connections.clone(),
                &store,
                deals.fork(),
            ),
            strands: Strands::load(config.strands.clone(), &store),
            crossword: Crossword::load(config.crossword.clone(), &store),
            registry: CompletionRegistry::new(store.clone()),
            config,
            store,
            deals,
        };
        info!(completed = arcade.registry.completed().len(), "arcade opened");
        Ok(arcade)
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CompletionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Games in menu order with their badges.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        let completed = self.registry.completed();
        GameId::all()
            .map(|id| MenuEntry {
                id,
                name: id.display_name(),
                completed: completed.contains(&id),
            })
            .collect()
    }

    #[must_use]
    pub fn wordle(&self) -> &Wordle {
        &self.wordle
    }

    pub fn wordle_mut(&mut self) -> &mut Wordle {
        &mut self.wordle
    }

    #[must_use]
    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn connections_mut(&mut self) -> &mut Connections {
        &mut self.connections
    }

    #[must_use]
    pub fn strands(&self) -> &Strands {
        &self.strands
    }

    pub fn strands_mut(&mut self) -> &mut Strands {
        &mut self.strands
    }

    #[must_use]
    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    pub fn crossword_mut(&mut self) -> &mut Crossword {
        &mut self.crossword
    }

    /// The engine behind `id`.
    #[must_use]
    pub fn engine(&self, id: GameId) -> &dyn PuzzleEngine {
        match id {
            GameId::Wordle => &self.wordle,
            GameId::Connections => &self.connections,
            GameId::Strands => &self.strands,
            GameId::Crossword => &self.crossword,
        }
    }

    pub fn engine_mut(&mut self, id: GameId) -> &mut dyn PuzzleEngine {
        match id {
            GameId::Wordle => &mut self.wordle,
            GameId::Connections => &mut self.connections,
            GameId::Strands => &mut self.strands,
            GameId::Crossword => &mut self.crossword,
        }
    }

    /// Reset one game. The other games and their badges are untouched.
    pub fn reset_game(&mut self, id: GameId) {
        self.engine_mut(id).reset();
    }

    /// Forget everything: remove every game's snapshot and the registry,
    /// then reload all engines from the emptied store. Connections gets a
    /// new deal.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        for id in GameId::all() {
            if let Err(err) = self.store.remove(id.storage_key()) {
                warn!(game = %id, error = %err, "could not remove snapshot");
            }
        }
        self.registry.reset_all();

        let store = &self.store;
        self.wordle = Wordle::load(self.config.wordle.clone(), store);
        self.connections = Connections::load(
            self.config.connections.clone(),
            store,
            self.deals.fork(),
        );
        self.strands = Strands::load(self.config.strands.clone(), store);
        self.crossword = Crossword::load(self.config.crossword.clone(), store);
        info!("all games reset");
    }
}
