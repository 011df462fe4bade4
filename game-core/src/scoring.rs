use crate::Word;
use game_types::{LetterResult, LetterStatus, ScoredGuess, WORD_LENGTH};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score `guess` against `secret`.
    ///
    /// Exact matches are settled first and consume their secret letter. The
    /// remaining positions then take the first unconsumed occurrence of their
    /// letter, left to right, so a letter is never credited more often than it
    /// appears in the secret.
    pub fn score(guess: &Word, secret: &Word) -> [LetterStatus; WORD_LENGTH] {
        let guess = guess.letters();
        let secret = secret.letters();

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact positions
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                statuses[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: present elsewhere
        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }

            let available = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = available {
                statuses[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        statuses
    }

    /// Score a guess and package it with its letters
    pub fn evaluate_guess(guess: &Word, secret: &Word) -> ScoredGuess {
        let statuses = Self::score(guess, secret);

        let letters = guess
            .chars()
            .zip(statuses)
            .enumerate()
            .map(|(position, (letter, status))| LetterResult {
                letter: letter.to_string(),
                status,
                position: position as u8,
            })
            .collect();

        ScoredGuess {
            word: guess.to_string(),
            letters,
        }
    }
}
