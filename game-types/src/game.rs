use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type GameId = Uuid;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// Number of rows (attempts) a player gets before the game is lost
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LetterStatus {
    Correct, // Green - correct letter in correct position
    Present, // Yellow - letter in word, wrong position
    Absent,  // Gray - letter contributes no match
}

impl LetterStatus {
    /// Ranking used when merging feedback for the same letter across guesses
    pub fn rank(self) -> u8 {
        match self {
            LetterStatus::Absent => 0,
            LetterStatus::Present => 1,
            LetterStatus::Correct => 2,
        }
    }
}

/// A single board cell. Cells of rows that have not been played yet are
/// `Unknown`, which is never the same thing as `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TileState {
    #[default]
    Unknown,
    Revealed(LetterStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterResult {
    pub letter: String,
    pub status: LetterStatus,
    pub position: u8,
}

/// A guess after evaluation: the uppercase word and one result per letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredGuess {
    pub word: String,
    pub letters: Vec<LetterResult>,
}

impl ScoredGuess {
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.letters.iter().map(|l| l.status).collect()
    }

    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| matches!(l.status, LetterStatus::Correct))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// What a successful submission hands back to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessReport {
    pub guess: ScoredGuess,
    pub outcome: GameOutcome,
    pub attempts_used: u8,
    /// Only populated once the game is lost
    pub revealed_secret: Option<String>,
}

/// Safe view of a game that never exposes the secret while it can still be guessed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSnapshot {
    pub id: GameId,
    pub word_length: u8,
    pub max_attempts: u8,
    pub current_row: u8,
    pub outcome: GameOutcome,
    pub board: Vec<ScoredGuess>,
    pub revealed_secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(letter: &str, status: LetterStatus, position: u8) -> LetterResult {
        LetterResult {
            letter: letter.to_string(),
            status,
            position,
        }
    }

    #[test]
    fn test_outcome_terminal_states() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Won.is_terminal());
        assert!(GameOutcome::Lost.is_terminal());
        assert_eq!(GameOutcome::default(), GameOutcome::InProgress);
    }

    #[test]
    fn test_unknown_tile_is_not_absent() {
        assert_eq!(TileState::default(), TileState::Unknown);
        assert_ne!(TileState::Unknown, TileState::Revealed(LetterStatus::Absent));
    }

    #[test]
    fn test_status_rank_ordering() {
        assert!(LetterStatus::Correct.rank() > LetterStatus::Present.rank());
        assert!(LetterStatus::Present.rank() > LetterStatus::Absent.rank());
    }

    #[test]
    fn test_scored_guess_solved() {
        let solved = ScoredGuess {
            word: "AB".to_string(),
            letters: vec![
                letter("A", LetterStatus::Correct, 0),
                letter("B", LetterStatus::Correct, 1),
            ],
        };
        assert!(solved.is_solved());

        let partial = ScoredGuess {
            word: "AB".to_string(),
            letters: vec![
                letter("A", LetterStatus::Correct, 0),
                letter("B", LetterStatus::Present, 1),
            ],
        };
        assert!(!partial.is_solved());
        assert_eq!(
            partial.statuses(),
            vec![LetterStatus::Correct, LetterStatus::Present]
        );

        let empty = ScoredGuess {
            word: String::new(),
            letters: Vec::new(),
        };
        assert!(!empty.is_solved());
    }

    #[test]
    fn test_report_serializes_without_secret_while_in_progress() {
        let report = GuessReport {
            guess: ScoredGuess {
                word: "A".to_string(),
                letters: vec![letter("A", LetterStatus::Absent, 0)],
            },
            outcome: GameOutcome::InProgress,
            attempts_used: 1,
            revealed_secret: None,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"outcome\":\"InProgress\""));
        assert!(json.contains("\"revealed_secret\":null"));
    }
}
