use game_types::{RejectionReason, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;

/// A five letter word, stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("expected {WORD_LENGTH} letters, got {0}")]
    WrongLength(usize),
    #[error("word contains non-alphabetic characters")]
    NotAlphabetic,
}

impl Word {
    /// Case-fold `raw` into a word. Nothing is trimmed: surrounding
    /// whitespace counts towards the length.
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        let len = raw.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::WrongLength(len));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(raw.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::NotAlphabetic);
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, position: usize) -> char {
        self.0[position] as char
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| b as char)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<WordError> for RejectionReason {
    fn from(err: WordError) -> Self {
        match err {
            WordError::WrongLength(_) => RejectionReason::WrongLength,
            // Anything that is not made of letters can never be in the vocabulary
            WordError::NotAlphabetic => RejectionReason::NotInWordList,
        }
    }
}
