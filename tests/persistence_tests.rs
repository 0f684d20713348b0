//! Persistence and completion registry tests.
//!
//! These tests verify:
//! - Save then load reproduces every engine's state
//! - Registry idempotence and per-game resets
//! - Fallback to defaults on malformed data
//! - Play continues when the store fails
//! - The file-backed store and the arcade's global reset

use proptest::prelude::*;

use puzzle_arcade::games::{Connections, Crossword, Strands, Wordle};
use puzzle_arcade::storage::COMPLETED_GAMES_KEY;
use puzzle_arcade::{
    Arcade, ArcadeConfig, Cell, CompletionRegistry, FileStore, GameId, GameRng, KeyValueStore,
    PuzzleEngine, SharedStore, StoreError,
};

/// Store whose reads and writes always fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::new("store unavailable"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::new("store unavailable"))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::new("store unavailable"))
    }
}

/// Test that every engine reloads exactly what it saved.
#[test]
fn test_round_trip_every_engine() {
    let store = SharedStore::in_memory();
    let config = ArcadeConfig::default();

    let mut wordle = Wordle::load(config.wordle.clone(), &store);
    for label in ["H", "E", "L", "L", "O", "ENTER", "A", "U"] {
        wordle.press(label);
    }
    let mut connections = Connections::load(config.connections.clone(), &store, GameRng::new(3));
    for word in ["DOG", "CAT", "BIRD", "FISH"] {
        connections.toggle_word(word);
    }
    connections.submit_guess();
    connections.toggle_word("RED");
    let mut strands = Strands::load(config.strands.clone(), &store);
    for col in 0..5 {
        strands.extend_path(Cell::new(1, col));
    }
    strands.submit_path();
    strands.extend_path(Cell::new(4, 0));
    let mut crossword = Crossword::load(config.crossword.clone(), &store);
    crossword.set_cell(Cell::new(0, 0), Some('R'));
    crossword.select_cell(Some(Cell::new(0, 1)));
    crossword.tick();

    assert_eq!(Wordle::load(config.wordle.clone(), &store).state(), wordle.state());
    assert_eq!(
        Connections::load(config.connections.clone(), &store, GameRng::new(99)).state(),
        connections.state()
    );
    assert_eq!(Strands::load(config.strands.clone(), &store).state(), strands.state());
    assert_eq!(Crossword::load(config.crossword.clone(), &store).state(), crossword.state());
}

/// Test the stored JSON shape of a Strands snapshot.
#[test]
fn test_strands_wire_format() {
    let store = SharedStore::in_memory();
    let mut strands = Strands::load(Default::default(), &store);
    strands.extend_path(Cell::new(0, 0));
    strands.extend_path(Cell::new(0, 1));

    let raw = store.get(GameId::Strands.storage_key()).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["selectedCells"], serde_json::json!(["0-0", "0-1"]));
    assert_eq!(value["currentWord"], "TH");
    assert_eq!(value["isSelecting"], true);
}

/// Test that malformed or mismatched snapshots fall back per game.
#[test]
fn test_malformed_data_falls_back() {
    let store = SharedStore::in_memory();
    store.set(GameId::Wordle.storage_key(), "{not json").unwrap();
    store
        .set(
            GameId::Crossword.storage_key(),
            r#"{"grid":[["A"]],"selectedCell":null,"timeElapsed":5,"isCompleted":false}"#,
        )
        .unwrap();
    store.set(COMPLETED_GAMES_KEY, "42").unwrap();

    let arcade = Arcade::open(ArcadeConfig::default(), store).unwrap();
    assert_eq!(arcade.wordle().state().current_row, 0);
    assert_eq!(arcade.crossword().state().time_elapsed, 0);
    assert_eq!(arcade.crossword().state().grid.len(), 5);
    assert!(arcade.registry().completed().is_empty());
}

/// Test that a failing store never stops play.
#[test]
fn test_broken_store_keeps_playing() {
    let store = SharedStore::new(BrokenStore);
    let mut arcade = Arcade::open(ArcadeConfig::default(), store).unwrap();

    for label in ["A", "U", "G", "I", "E", "ENTER"] {
        arcade.wordle_mut().press(label);
    }
    assert!(arcade.wordle().state().won);
    assert!(!arcade.registry().is_complete(GameId::Wordle));

    arcade.reset_all();
    assert!(!arcade.wordle().state().won);
}

/// Test that resetting one game keeps the other badges.
#[test]
fn test_reset_keeps_other_badges() {
    let store = SharedStore::in_memory();
    let registry = CompletionRegistry::new(store.clone());
    registry.mark_complete(GameId::Strands);

    let mut wordle = Wordle::load(Default::default(), &store);
    for label in ["A", "U", "G", "I", "E", "ENTER"] {
        wordle.press(label);
    }
    assert_eq!(registry.completed(), [GameId::Strands, GameId::Wordle]);

    wordle.reset();
    assert_eq!(registry.completed(), [GameId::Strands]);
}

/// Test the file store end to end through the arcade.
#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArcadeConfig::default().with_seed(1);

    {
        let store = SharedStore::new(FileStore::open(dir.path()).unwrap());
        let mut arcade = Arcade::open(config.clone(), store).unwrap();
        for label in ["A", "U", "G", "I", "E", "ENTER"] {
            arcade.wordle_mut().press(label);
        }
        arcade.crossword_mut().set_cell(Cell::new(4, 4), Some('r'));
    }

    let store = SharedStore::new(FileStore::open(dir.path()).unwrap());
    let mut arcade = Arcade::open(config.clone(), store).unwrap();
    assert!(arcade.menu()[0].completed);
    assert_eq!(arcade.crossword().entry(Cell::new(4, 4)), Some('R'));

    arcade.reset_all();
    assert!(arcade.menu().iter().all(|entry| !entry.completed));
    assert!(!dir.path().join("wordle-game-state.json").exists());
    assert!(!dir.path().join("completed-games.json").exists());
}

/// Test that global resets deal fresh Connections boards, not the opening one.
#[test]
fn test_reset_all_reshuffles_connections() {
    let mut arcade = Arcade::open(ArcadeConfig::default(), SharedStore::in_memory()).unwrap();
    let first = arcade.connections().state().words.clone();
    arcade.connections_mut().shuffle();

    let mut repeats = Vec::new();
    for _ in 0..5 {
        arcade.reset_all();
        repeats.push(arcade.connections().state().words == first);
    }
    assert!(repeats.iter().any(|same| !same), "every reset replayed the first deal");
}

proptest! {
    /// Marking games in any order, any number of times, never duplicates.
    #[test]
    fn prop_registry_has_no_duplicates(marks in prop::collection::vec(0usize..4, 0..20)) {
        let registry = CompletionRegistry::new(SharedStore::in_memory());
        let ids: Vec<GameId> = GameId::all().collect();
        for &index in &marks {
            registry.mark_complete(ids[index]);
        }

        let completed = registry.completed();
        for id in &completed {
            prop_assert_eq!(completed.iter().filter(|c| *c == id).count(), 1);
        }
        for &index in &marks {
            prop_assert!(registry.is_complete(ids[index]));
        }
    }
}
