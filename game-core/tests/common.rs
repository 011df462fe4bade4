#![allow(dead_code)]

use game_core::{Dictionary, GameEngine, Word};
use game_types::{GameOutcome, ScoredGuess};
use std::sync::Arc;

pub const TEST_WORDS: &[&str] = &[
    "crane", "slate", "hello", "world", "llama", "allow", "speed", "erase", "train", "plane",
    "water", "stone", "bread", "cream", "house", "mouse", "eerie", "geese", "abbey", "kayak",
];

/// Creates a test dictionary with a known set of words
pub fn create_test_dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::from_words(TEST_WORDS).unwrap())
}

/// Creates a game with a specific secret word
pub fn create_game_with_secret(secret: &str) -> GameEngine {
    GameEngine::new(create_test_dictionary(), Word::parse(secret).unwrap())
}

/// Comparable view of everything a rejected guess must not touch
#[derive(Debug, PartialEq)]
pub struct ObservableState {
    pub current_row: usize,
    pub outcome: GameOutcome,
    pub history: Vec<ScoredGuess>,
}

pub fn observe(game: &GameEngine) -> ObservableState {
    ObservableState {
        current_row: game.current_row(),
        outcome: game.outcome(),
        history: game.history().to_vec(),
    }
}

/// Plays the given guesses, panicking on any rejection
pub fn play(game: &mut GameEngine, guesses: &[&str]) {
    for guess in guesses {
        game.submit_guess(guess)
            .unwrap_or_else(|reason| panic!("guess {guess} rejected: {reason}"));
    }
}
