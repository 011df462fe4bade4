use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why a submitted guess was refused. A rejection never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum RejectionReason {
    #[error("Word must be 5 letters long")]
    WrongLength,
    #[error("Not in word list")]
    NotInWordList,
    #[error("Game is already over")]
    GameAlreadyOver,
}
