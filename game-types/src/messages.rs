use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameSnapshot, GuessReport, RejectionReason};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClientMessage {
    SubmitGuess { word: String },
    NewGame,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServerMessage {
    GameStarted { snapshot: GameSnapshot },
    GuessAccepted { report: GuessReport },
    GuessRejected { reason: RejectionReason, message: String },
}

impl ServerMessage {
    pub fn rejected(reason: RejectionReason) -> Self {
        ServerMessage::GuessRejected {
            reason,
            message: reason.to_string(),
        }
    }
}

impl From<Result<GuessReport, RejectionReason>> for ServerMessage {
    fn from(result: Result<GuessReport, RejectionReason>) -> Self {
        match result {
            Ok(report) => ServerMessage::GuessAccepted { report },
            Err(reason) => ServerMessage::rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_carries_display_message() {
        let message = ServerMessage::from(Err(RejectionReason::NotInWordList));
        assert_eq!(
            message,
            ServerMessage::GuessRejected {
                reason: RejectionReason::NotInWordList,
                message: "Not in word list".to_string(),
            }
        );
    }

    #[test]
    fn test_client_message_wire_format() {
        let msg = ClientMessage::SubmitGuess {
            word: "crane".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"SubmitGuess":{"word":"crane"}}"#);

        let parsed: ClientMessage = serde_json::from_str(r#""NewGame""#).unwrap();
        assert_eq!(parsed, ClientMessage::NewGame);
    }
}
