use crate::{Dictionary, ScoringEngine, Word};
use game_types::{
    GameId, GameOutcome, GameSnapshot, GuessReport, LetterStatus, MAX_ATTEMPTS, RejectionReason,
    ScoredGuess, TileState, WORD_LENGTH,
};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// One single-player game: a secret fixed at construction and the
/// append-only history of scored guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    id: GameId,
    dictionary: Arc<Dictionary>,
    secret: Word,
    history: Vec<ScoredGuess>,
    outcome: GameOutcome,
}

impl GameEngine {
    /// Start a game around a known secret
    pub fn new(dictionary: Arc<Dictionary>, secret: Word) -> Self {
        let id = Uuid::new_v4();
        info!(game_id = %id, "Game started");

        Self {
            id,
            dictionary,
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Start a game with a secret drawn from the dictionary
    pub fn start(dictionary: Arc<Dictionary>) -> Self {
        let secret = dictionary.pick_random_secret();
        Self::new(dictionary, secret)
    }

    pub fn start_with_rng<R: Rng + ?Sized>(dictionary: Arc<Dictionary>, rng: &mut R) -> Self {
        let secret = dictionary.pick_random_secret_with(rng);
        Self::new(dictionary, secret)
    }

    /// Validate, score and record one guess.
    ///
    /// Checks run in order: length, vocabulary, then whether the game is
    /// still running. Any rejection leaves the game untouched.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessReport, RejectionReason> {
        let guess = Word::parse(input).map_err(RejectionReason::from)?;

        if !self.dictionary.contains_word(&guess) {
            debug!(game_id = %self.id, guess = %guess, "Rejected guess not in word list");
            return Err(RejectionReason::NotInWordList);
        }

        if self.outcome.is_terminal() {
            return Err(RejectionReason::GameAlreadyOver);
        }

        let scored = ScoringEngine::evaluate_guess(&guess, &self.secret);
        self.history.push(scored.clone());

        self.outcome = if guess == self.secret {
            GameOutcome::Won
        } else if self.history.len() >= MAX_ATTEMPTS {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        };

        debug!(
            game_id = %self.id,
            row = self.history.len(),
            guess = %guess,
            "Scored guess"
        );
        match self.outcome {
            GameOutcome::Won => info!(game_id = %self.id, attempts = self.history.len(), "Game won"),
            GameOutcome::Lost => info!(game_id = %self.id, secret = %self.secret, "Game lost"),
            GameOutcome::InProgress => {}
        }

        Ok(GuessReport {
            guess: scored,
            outcome: self.outcome,
            attempts_used: self.history.len() as u8,
            revealed_secret: self.revealed_secret(),
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Index of the next row to play; equals the number of scored guesses
    pub fn current_row(&self) -> usize {
        self.history.len()
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// The secret, but only after the game has been lost
    pub fn revealed_secret(&self) -> Option<String> {
        match self.outcome {
            GameOutcome::Lost => Some(self.secret.to_string()),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            word_length: WORD_LENGTH as u8,
            max_attempts: MAX_ATTEMPTS as u8,
            current_row: self.history.len() as u8,
            outcome: self.outcome,
            board: self.history.clone(),
            revealed_secret: self.revealed_secret(),
        }
    }

    /// Full 6x5 grid; rows not played yet stay `Unknown`
    pub fn board(&self) -> [[TileState; WORD_LENGTH]; MAX_ATTEMPTS] {
        let mut board = [[TileState::Unknown; WORD_LENGTH]; MAX_ATTEMPTS];
        for (row, guess) in board.iter_mut().zip(&self.history) {
            for (cell, letter) in row.iter_mut().zip(&guess.letters) {
                *cell = TileState::Revealed(letter.status);
            }
        }
        board
    }

    /// Best status seen so far for every guessed letter
    pub fn letter_hints(&self) -> BTreeMap<char, LetterStatus> {
        let mut hints = BTreeMap::new();
        for letter in self.history.iter().flat_map(|g| &g.letters) {
            let Some(ch) = letter.letter.chars().next() else {
                continue;
            };
            hints
                .entry(ch)
                .and_modify(|best: &mut LetterStatus| {
                    if letter.status.rank() > best.rank() {
                        *best = letter.status;
                    }
                })
                .or_insert(letter.status);
        }
        hints
    }
}
