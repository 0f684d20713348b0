//! Strands engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace};

use super::config::StrandsConfig;
use crate::core::{Cell, GameId};
use crate::rules::{Outcome, PuzzleEngine};
use crate::storage::{CompletionRegistry, PersistentGameState, SharedStore};

/// A chain of cells, each touching the one before it.
pub type Path = SmallVec<[Cell; 8]>;

/// Persisted Strands progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrandsState {
    /// The open path, in selection order.
    pub selected_cells: Path,
    /// Words found so far.
    pub found_words: Vec<String>,
    /// The path that produced each entry of `found_words`.
    pub found_word_cells: Vec<Path>,
    /// Letters along `selected_cells`.
    pub current_word: String,
    pub is_selecting: bool,
}

impl StrandsState {
    /// Check the snapshot is consistent with `config`'s grid and words.
    #[must_use]
    pub fn fits(&self, config: &StrandsConfig) -> bool {
        let letters: Option<String> = self
            .selected_cells
            .iter()
            .map(|&cell| config.letter_at(cell))
            .collect();
        let found_paths_ok = self
            .found_word_cells
            .iter()
            .flatten()
            .all(|cell| cell.in_bounds(config.rows(), config.cols()));
        let found_unique = self
            .found_words
            .iter()
            .enumerate()
            .all(|(i, w)| config.is_target(w) && !self.found_words[..i].contains(w));

        letters.as_deref() == Some(self.current_word.as_str())
            && self.is_selecting != self.selected_cells.is_empty()
            && self.found_words.len() == self.found_word_cells.len()
            && found_paths_ok
            && found_unique
    }
}

/// A found word, ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoundWord<'a> {
    pub word: &'a str,
    pub cells: &'a [Cell],
    pub is_spangram: bool,
}

/// Strands: trace hidden words through a letter grid.
///
/// ## Input
///
/// Paths grow one adjacent cell at a time (diagonals count). A path may not
/// revisit a cell. `submit_path` checks the spelled word and always clears
/// the path. `click_cell` combines both: clicking the path's last cell
/// again submits it.
#[derive(Debug)]
pub struct Strands {
    config: StrandsConfig,
    state: StrandsState,
    persistence: PersistentGameState<StrandsState>,
    registry: CompletionRegistry,
}

impl Strands {
    /// Restore the game from `store`, or start a fresh one.
    #[instrument(skip_all, fields(theme = %config.theme))]
    pub fn load(config: StrandsConfig, store: &SharedStore) -> Self {
        let persistence = PersistentGameState::new(GameId::Strands.storage_key(), store.clone());
        let state = persistence.load(StrandsState::default, |s| s.fits(&config));
        Self {
            config,
            state,
            persistence,
            registry: CompletionRegistry::new(store.clone()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &StrandsState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &StrandsConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.config.theme
    }

    /// Words found and words in the puzzle.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.found_words.len(), self.config.words.len())
    }

    /// Found words in discovery order, with the spangram flagged.
    pub fn found_words(&self) -> impl Iterator<Item = FoundWord<'_>> {
        self.state
            .found_words
            .iter()
            .zip(&self.state.found_word_cells)
            .map(|(word, cells)| FoundWord {
                word,
                cells,
                is_spangram: *word == self.config.spangram,
            })
    }

    /// Check if `cell` is on the open path.
    #[must_use]
    pub fn is_cell_selected(&self, cell: Cell) -> bool {
        self.state.selected_cells.contains(&cell)
    }

    /// Check if `cell` lies on the path of any found word.
    #[must_use]
    pub fn is_cell_found(&self, cell: Cell) -> bool {
        self.state.found_word_cells.iter().any(|path| path.contains(&cell))
    }

    /// Handle a click on a grid cell.
    ///
    /// Starts a path, submits it when the last cell is clicked again, or
    /// extends it.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn click_cell(&mut self, cell: Cell) {
        if self.state.is_selecting && self.state.selected_cells.last() == Some(&cell) {
            self.submit_path();
        } else {
            self.extend_path(cell);
        }
    }

    /// Start a path at `cell`, or append `cell` to the open path.
    ///
    /// Ignored when `cell` is outside the grid, already on the path, or not
    /// adjacent to the path's last cell.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn extend_path(&mut self, cell: Cell) {
        let Some(letter) = self.config.letter_at(cell) else {
            debug!("cell outside grid");
            return;
        };

        match self.state.selected_cells.last() {
            None => {
                self.state.is_selecting = true;
            }
            Some(_) if self.state.selected_cells.contains(&cell) => {
                trace!("cell already on path");
                return;
            }
            Some(&last) if !last.is_adjacent(cell) => {
                trace!(last = %last, "cell not adjacent");
                return;
            }
            Some(_) => {}
        }

        self.state.selected_cells.push(cell);
        self.state.current_word.push(letter);
        self.persistence.save(&self.state);
    }

    /// Check the open path's word and clear the path.
    pub fn submit_path(&mut self) {
        self.check_word();
    }

    /// Record the current word if it is an unfound target, then clear the
    /// selection.
    #[instrument(skip(self), fields(word = %self.state.current_word))]
    pub fn check_word(&mut self) {
        if self.state.selected_cells.is_empty() {
            trace!("no open path");
            return;
        }
        let word = std::mem::take(&mut self.state.current_word);
        let path = std::mem::take(&mut self.state.selected_cells);
        self.state.is_selecting = false;

        if self.config.is_target(&word) && !self.state.found_words.contains(&word) {
            info!(spangram = word == self.config.spangram, "word found");
            self.state.found_words.push(word);
            self.state.found_word_cells.push(path);
            if self.state.found_words.len() == self.config.words.len() {
                info!("all words found");
                self.registry.mark_complete(GameId::Strands);
            }
        } else {
            debug!("not a new word");
        }
        self.persistence.save(&self.state);
    }

    /// Drop the open path without checking it.
    pub fn reset_selection(&mut self) {
        if self.state.selected_cells.is_empty() {
            return;
        }
        self.state.selected_cells.clear();
        self.state.current_word.clear();
        self.state.is_selecting = false;
        self.persistence.save(&self.state);
    }
}

impl PuzzleEngine for Strands {
    fn id(&self) -> GameId {
        GameId::Strands
    }

    fn outcome(&self) -> Outcome {
        if self.state.found_words.len() == self.config.words.len() {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.state = StrandsState::default();
        self.persistence.save(&self.state);
        self.registry.unmark(GameId::Strands);
        info!("strands reset");
    }
}
