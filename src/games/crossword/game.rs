//! Crossword engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::clock::{format_time, Clock, TickSource};
use super::clues::clue_number_at;
use super::config::{CrosswordConfig, Square};
use crate::core::{Cell, GameId};
use crate::rules::{Outcome, PuzzleEngine};
use crate::storage::{CompletionRegistry, PersistentGameState, SharedStore};

/// Persisted crossword progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordState {
    /// Entries, `""` for empty and blocked squares.
    pub grid: Vec<Vec<String>>,
    /// Focused square, UI only.
    pub selected_cell: Option<Cell>,
    /// Seconds on the clock.
    pub time_elapsed: u64,
    pub is_completed: bool,
}

impl CrosswordState {
    /// Empty grid of `size` x `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            grid: vec![vec![String::new(); size]; size],
            selected_cell: None,
            time_elapsed: 0,
            is_completed: false,
        }
    }

    fn entry(&self, cell: Cell) -> &str {
        self.grid
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .map_or("", String::as_str)
    }

    /// True if every open square holds its answer letter.
    #[must_use]
    pub fn matches(&self, config: &CrosswordConfig) -> bool {
        config.open_squares().all(|(cell, letter)| {
            let mut chars = self.entry(cell).chars();
            chars.next() == Some(letter) && chars.next().is_none()
        })
    }

    /// Check the snapshot has the puzzle's dimensions and keeps blocked
    /// squares empty.
    #[must_use]
    pub fn fits(&self, config: &CrosswordConfig) -> bool {
        let size = config.size();
        let dimensions_ok = self.grid.len() == size && self.grid.iter().all(|row| row.len() == size);
        if !dimensions_ok {
            return false;
        }

        let entries_ok = self.grid.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, entry)| {
                match config.square(Cell::new(r, c)) {
                    Some(Square::Blocked) => entry.is_empty(),
                    _ => entry.chars().count() <= 1,
                }
            })
        });
        let selection_ok = self.selected_cell.map_or(true, |cell| cell.in_bounds(size, size));

        entries_ok && selection_ok && (!self.is_completed || self.matches(config))
    }
}

/// Crossword: fill the grid to match the solution.
///
/// ## Completion
///
/// After every entry the grid is compared against the solution. A full,
/// correct grid completes the puzzle, stops the clock and freezes the
/// grid. A full but wrong grid simply stays incomplete; `check_solution`
/// can be asked explicitly.
///
/// ## Clock
///
/// The host drives time with `tick` (one second), `advance` or `poll`.
#[derive(Debug)]
pub struct Crossword {
    config: CrosswordConfig,
    state: CrosswordState,
    clock: Clock,
    persistence: PersistentGameState<CrosswordState>,
    registry: CompletionRegistry,
}

impl Crossword {
    /// Restore the game from `store`, or start a fresh one.
    #[instrument(skip_all, fields(size = config.size()))]
    pub fn load(config: CrosswordConfig, store: &SharedStore) -> Self {
        let persistence = PersistentGameState::new(GameId::Crossword.storage_key(), store.clone());
        let state = persistence.load(|| CrosswordState::new(config.size()), |s| s.fits(&config));
        let clock = if state.is_completed {
            Clock::stopped()
        } else {
            Clock::running()
        };
        Self {
            config,
            state,
            clock,
            persistence,
            registry: CompletionRegistry::new(store.clone()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &CrosswordState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &CrosswordConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Entry at `cell`, `None` if empty, blocked or outside the grid.
    #[must_use]
    pub fn entry(&self, cell: Cell) -> Option<char> {
        self.state.entry(cell).chars().next()
    }

    /// Write `value` (uppercased) into `cell`, or clear it with `None`.
    ///
    /// Ignored on blocked squares, outside the grid, and once the puzzle is
    /// complete.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn set_cell(&mut self, cell: Cell, value: Option<char>) {
        if !matches!(self.config.square(cell), Some(Square::Letter(_))) {
            debug!("not an open square");
            return;
        }
        if self.state.is_completed {
            debug!("puzzle complete, grid frozen");
            return;
        }

        let entry = match value {
            Some(c) if !c.is_whitespace() => c.to_uppercase().next().unwrap_or(c).to_string(),
            _ => String::new(),
        };
        self.state.grid[cell.row][cell.col] = entry;

        if self.state.matches(&self.config) {
            self.state.is_completed = true;
            self.clock.stop();
            info!(seconds = self.state.time_elapsed, "crossword solved");
            self.registry.mark_complete(GameId::Crossword);
        }
        self.persistence.save(&self.state);
    }

    /// Apply the text of an input box: its first visible character, or a
    /// clear when there is none.
    pub fn enter_text(&mut self, cell: Cell, text: &str) {
        self.set_cell(cell, text.chars().find(|c| !c.is_whitespace()));
    }

    /// Move focus. Has no gameplay effect.
    pub fn select_cell(&mut self, cell: Option<Cell>) {
        let size = self.config.size();
        if cell.is_some_and(|c| !c.in_bounds(size, size)) {
            return;
        }
        self.state.selected_cell = cell;
        self.persistence.save(&self.state);
    }

    /// True if every open square has an entry.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.config
            .open_squares()
            .all(|(cell, _)| !self.state.entry(cell).is_empty())
    }

    /// Manual check: does the grid match the solution? Never mutates.
    #[must_use]
    pub fn check_solution(&self) -> bool {
        self.state.matches(&self.config)
    }

    /// Clue number printed in `cell`, if any.
    #[must_use]
    pub fn clue_number_at(&self, cell: Cell) -> Option<u32> {
        clue_number_at(&self.config, cell)
    }

    /// One second passes.
    pub fn tick(&mut self) {
        self.advance(Duration::from_secs(1));
    }

    /// `dt` passes. Whole seconds are added while the clock runs.
    pub fn advance(&mut self, dt: Duration) {
        let seconds = self.clock.advance(dt);
        if seconds > 0 {
            self.state.time_elapsed += seconds;
            self.persistence.save(&self.state);
        }
    }

    /// Pull elapsed time from `source`.
    pub fn poll(&mut self, source: &mut impl TickSource) {
        self.advance(source.elapsed());
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_time(self.state.time_elapsed)
    }
}

impl PuzzleEngine for Crossword {
    fn id(&self) -> GameId {
        GameId::Crossword
    }

    fn outcome(&self) -> Outcome {
        if self.state.is_completed {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.state = CrosswordState::new(self.config.size());
        self.clock = Clock::running();
        self.persistence.save(&self.state);
        self.registry.unmark(GameId::Crossword);
        info!("crossword reset");
    }
}
