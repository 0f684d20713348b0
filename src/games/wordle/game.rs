//! Wordle engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::config::{WordleConfig, WORD_LENGTH};
use crate::core::GameId;
use crate::rules::{Outcome, PuzzleEngine};
use crate::storage::{CompletionRegistry, PersistentGameState, SharedStore};

/// A key from the on-screen or physical keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A letter, stored uppercase.
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a keyboard label: `"ENTER"`, `"BACKSPACE"` or a single letter.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            "ENTER" => Some(Key::Enter),
            "BACKSPACE" => Some(Key::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Key::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

/// Colour of one tile in a finalized row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position.
    Correct,
    /// Letter occurs somewhere in the solution.
    Present,
    /// Letter does not occur in the solution.
    Absent,
}

/// Persisted Wordle progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordleState {
    /// One slot per row; `""` until the row is submitted.
    pub guesses: Vec<String>,
    /// Letters typed into the active row.
    pub current_guess: String,
    /// Index of the active row.
    pub current_row: usize,
    pub game_over: bool,
    pub won: bool,
}

impl WordleState {
    /// Empty board with `rows` rows.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            guesses: vec![String::new(); rows],
            current_guess: String::new(),
            current_row: 0,
            game_over: false,
            won: false,
        }
    }

    /// Check the snapshot can be indexed safely for `config`'s board.
    #[must_use]
    pub fn fits(&self, config: &WordleConfig) -> bool {
        let well_formed = |guess: &str| guess.len() == WORD_LENGTH && guess.bytes().all(|b| b.is_ascii_uppercase());

        self.guesses.len() == config.max_guesses
            && self.current_row < config.max_guesses
            && self.current_guess.len() <= WORD_LENGTH
            && self.guesses[..self.current_row].iter().all(|g| well_formed(g.as_str()))
            && (!self.won || self.game_over)
    }
}

/// Wordle: guess a five-letter word in a fixed number of rows.
///
/// ## State Machine
///
/// `Active(row)` moves to `Won` when a submitted row equals the solution,
/// or to `Lost` when the last row is submitted without a match. Both are
/// terminal: further keys are ignored until `reset`.
#[derive(Debug)]
pub struct Wordle {
    config: WordleConfig,
    state: WordleState,
    persistence: PersistentGameState<WordleState>,
    registry: CompletionRegistry,
}

impl Wordle {
    /// Restore the game from `store`, or start a fresh one.
    #[instrument(skip_all, fields(solution_len = config.solution.len()))]
    pub fn load(config: WordleConfig, store: &SharedStore) -> Self {
        let persistence = PersistentGameState::new(GameId::Wordle.storage_key(), store.clone());
        let state = persistence.load(|| WordleState::new(config.max_guesses), |s| s.fits(&config));
        Self {
            config,
            state,
            persistence,
            registry: CompletionRegistry::new(store.clone()),
        }
    }

    #[must_use]
    pub fn state(&self) -> &WordleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &WordleConfig {
        &self.config
    }

    /// Forward a keyboard label. Unknown labels are ignored.
    pub fn press(&mut self, label: &str) {
        match Key::from_label(label) {
            Some(key) => self.press_key(key),
            None => debug!(label, "ignoring unknown key"),
        }
    }

    /// Handle one key press.
    #[instrument(skip(self), fields(row = self.state.current_row))]
    pub fn press_key(&mut self, key: Key) {
        if self.state.game_over {
            debug!("game over, ignoring key");
            return;
        }

        let changed = match key {
            Key::Backspace => self.state.current_guess.pop().is_some(),
            Key::Enter => self.submit_row(),
            Key::Letter(c) => {
                if c.is_ascii_alphabetic() && self.state.current_guess.len() < WORD_LENGTH {
                    self.state.current_guess.push(c.to_ascii_uppercase());
                    true
                } else {
                    false
                }
            }
        };

        if changed {
            self.persistence.save(&self.state);
        }
    }

    fn submit_row(&mut self) -> bool {
        if self.state.current_guess.len() != WORD_LENGTH {
            debug!(len = self.state.current_guess.len(), "incomplete guess, ignoring enter");
            return false;
        }

        let guess = std::mem::take(&mut self.state.current_guess).to_ascii_uppercase();
        let row = self.state.current_row;
        let last_row = self.config.max_guesses - 1;

        if guess == self.config.solution {
            self.state.won = true;
            self.state.game_over = true;
            info!(row, "solved");
            self.registry.mark_complete(GameId::Wordle);
        } else if row == last_row {
            self.state.game_over = true;
            info!("out of guesses");
        } else {
            self.state.current_row += 1;
        }
        self.state.guesses[row] = guess;
        true
    }

    /// Status of `letter` at `position`, by membership only.
    ///
    /// Repeated letters are not rationed: a letter present once in the
    /// solution reports `Present` at every misplaced occurrence.
    #[must_use]
    pub fn letter_status(&self, letter: char, position: usize) -> LetterStatus {
        let letter = letter.to_ascii_uppercase();
        let solution = &self.config.solution;

        if solution.chars().nth(position) == Some(letter) {
            LetterStatus::Correct
        } else if solution.contains(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        }
    }

    /// True if `row` has been submitted and can be coloured.
    #[must_use]
    pub fn is_row_finalized(&self, row: usize) -> bool {
        row < self.state.current_row || (self.state.game_over && row == self.state.current_row)
    }

    /// Tile statuses of a submitted row, or `None` for open rows.
    #[must_use]
    pub fn row_statuses(&self, row: usize) -> Option<Vec<LetterStatus>> {
        if !self.is_row_finalized(row) {
            return None;
        }
        let guess = self.state.guesses.get(row)?;
        Some(
            guess
                .chars()
                .enumerate()
                .map(|(position, letter)| self.letter_status(letter, position))
                .collect(),
        )
    }
}

impl PuzzleEngine for Wordle {
    fn id(&self) -> GameId {
        GameId::Wordle
    }

    fn outcome(&self) -> Outcome {
        match (self.state.game_over, self.state.won) {
            (true, true) => Outcome::Won,
            (true, false) => Outcome::Lost,
            _ => Outcome::InProgress,
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.state = WordleState::new(self.config.max_guesses);
        self.persistence.save(&self.state);
        self.registry.unmark(GameId::Wordle);
        info!("wordle reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Wordle {
        Wordle::load(WordleConfig::default(), &SharedStore::in_memory())
    }

    fn type_word(game: &mut Wordle, word: &str) {
        for c in word.chars() {
            game.press_key(Key::Letter(c));
        }
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(Key::from_label("ENTER"), Some(Key::Enter));
        assert_eq!(Key::from_label("BACKSPACE"), Some(Key::Backspace));
        assert_eq!(Key::from_label("q"), Some(Key::Letter('Q')));
        assert_eq!(Key::from_label("7"), None);
        assert_eq!(Key::from_label("AB"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn test_typing_caps_at_five() {
        let mut game = fresh();
        type_word(&mut game, "abcdefg");
        assert_eq!(game.state().current_guess, "ABCDE");

        game.press_key(Key::Backspace);
        assert_eq!(game.state().current_guess, "ABCD");
    }

    #[test]
    fn test_enter_needs_five_letters() {
        let mut game = fresh();
        type_word(&mut game, "AUG");
        game.press_key(Key::Enter);
        assert_eq!(game.state().current_row, 0);
        assert_eq!(game.state().current_guess, "AUG");
    }

    #[test]
    fn test_wrong_guess_advances_row() {
        let mut game = fresh();
        type_word(&mut game, "HELLO");
        game.press_key(Key::Enter);

        assert_eq!(game.state().current_row, 1);
        assert_eq!(game.state().guesses[0], "HELLO");
        assert!(game.state().current_guess.is_empty());
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_six_misses_lose() {
        let mut game = fresh();
        for _ in 0..6 {
            type_word(&mut game, "HELLO");
            game.press_key(Key::Enter);
        }
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.state().current_row, 5);

        type_word(&mut game, "AUGIE");
        game.press_key(Key::Enter);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(game.state().current_guess.is_empty());
    }

    #[test]
    fn test_letter_status_membership() {
        let game = fresh();
        assert_eq!(game.letter_status('A', 0), LetterStatus::Correct);
        assert_eq!(game.letter_status('a', 0), LetterStatus::Correct);
        assert_eq!(game.letter_status('E', 0), LetterStatus::Present);
        assert_eq!(game.letter_status('Z', 2), LetterStatus::Absent);
        assert_eq!(game.letter_status('E', 9), LetterStatus::Present);
    }

    #[test]
    fn test_row_statuses_only_for_finalized_rows() {
        let mut game = fresh();
        type_word(&mut game, "EAGLE");
        assert_eq!(game.row_statuses(0), None);

        game.press_key(Key::Enter);
        assert_eq!(
            game.row_statuses(0),
            Some(vec![
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Correct,
            ])
        );
        assert_eq!(game.row_statuses(1), None);
    }

    #[test]
    fn test_winning_row_is_finalized() {
        let mut game = fresh();
        type_word(&mut game, "AUGIE");
        game.press_key(Key::Enter);

        assert_eq!(game.state().current_row, 0);
        assert!(game.is_row_finalized(0));
        assert_eq!(game.row_statuses(0), Some(vec![LetterStatus::Correct; 5]));
    }

    #[test]
    fn test_fits_rejects_bad_shapes() {
        let config = WordleConfig::default();
        assert!(WordleState::new(6).fits(&config));
        assert!(!WordleState::new(5).fits(&config));

        let mut state = WordleState::new(6);
        state.current_row = 2;
        assert!(!state.fits(&config));
        state.guesses[0] = "HELLO".into();
        state.guesses[1] = "WORLD".into();
        assert!(state.fits(&config));

        state.current_row = 6;
        assert!(!state.fits(&config));
    }
}
