use game_core::{Dictionary, GameEngine};
use game_types::{ClientMessage, ServerMessage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::info;

/// A line typed by the player, after interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Message(ClientMessage),
    Quit,
}

/// `/new` starts over, `/quit` exits, anything else is a guess.
/// Only the line terminator is stripped.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    match line {
        "/new" => Input::Message(ClientMessage::NewGame),
        "/quit" => Input::Quit,
        word => Input::Message(ClientMessage::SubmitGuess {
            word: word.to_string(),
        }),
    }
}

/// Drives one game at a time for a single player. A new game replaces the
/// engine wholesale; engines are never reset in place.
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    rng: StdRng,
    game: GameEngine,
}

impl GameSession {
    pub fn new(dictionary: Arc<Dictionary>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = GameEngine::start_with_rng(dictionary.clone(), &mut rng);

        Self {
            dictionary,
            rng,
            game,
        }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn started(&self) -> ServerMessage {
        ServerMessage::GameStarted {
            snapshot: self.game.snapshot(),
        }
    }

    pub fn new_game(&mut self) -> ServerMessage {
        info!(previous_game = %self.game.id(), "Starting new game");
        self.game = GameEngine::start_with_rng(self.dictionary.clone(), &mut self.rng);
        self.started()
    }

    pub fn handle_message(&mut self, message: ClientMessage) -> ServerMessage {
        match message {
            ClientMessage::SubmitGuess { word } => self.game.submit_guess(&word).into(),
            ClientMessage::NewGame => self.new_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::{GameOutcome, RejectionReason};

    fn create_session(seed: u64) -> GameSession {
        let dictionary = Dictionary::from_words(["crane", "slate", "hello", "world"]).unwrap();
        GameSession::new(Arc::new(dictionary), Some(seed))
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("/new\n"), Input::Message(ClientMessage::NewGame));
        assert_eq!(parse_input("/quit\r\n"), Input::Quit);
        assert_eq!(
            parse_input("crane\n"),
            Input::Message(ClientMessage::SubmitGuess {
                word: "crane".to_string()
            })
        );
        // Spaces are the player's input and are kept
        assert_eq!(
            parse_input(" crane\n"),
            Input::Message(ClientMessage::SubmitGuess {
                word: " crane".to_string()
            })
        );
    }

    #[test]
    fn test_rejected_guess_message() {
        let mut session = create_session(3);
        let response = session.handle_message(ClientMessage::SubmitGuess {
            word: "cat".to_string(),
        });

        assert_eq!(response, ServerMessage::rejected(RejectionReason::WrongLength));
        assert_eq!(session.game().current_row(), 0);
    }

    #[test]
    fn test_accepted_guess_message() {
        let mut session = create_session(3);
        let response = session.handle_message(ClientMessage::SubmitGuess {
            word: "crane".to_string(),
        });

        match response {
            ServerMessage::GuessAccepted { report } => {
                assert_eq!(report.guess.word, "CRANE");
                assert_eq!(report.attempts_used, 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_new_game_replaces_engine() {
        let mut session = create_session(9);
        session.handle_message(ClientMessage::SubmitGuess {
            word: "slate".to_string(),
        });
        let old_id = session.game().id();

        let response = session.handle_message(ClientMessage::NewGame);
        match response {
            ServerMessage::GameStarted { snapshot } => {
                assert_ne!(snapshot.id, old_id);
                assert_eq!(snapshot.current_row, 0);
                assert_eq!(snapshot.outcome, GameOutcome::InProgress);
                assert!(snapshot.board.is_empty());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_seed_makes_games_reproducible() {
        let mut a = create_session(11);
        let mut b = create_session(11);

        for word in ["crane", "slate", "hello", "world"] {
            let msg = ClientMessage::SubmitGuess {
                word: word.to_string(),
            };
            assert_eq!(a.handle_message(msg.clone()), b.handle_message(msg));
        }
    }
}
