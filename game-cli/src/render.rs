use crate::OutputFormat;
use colored::Colorize;
use game_core::GameEngine;
use game_types::{
    GameOutcome, GuessReport, LetterStatus, MAX_ATTEMPTS, ScoredGuess, ServerMessage, WORD_LENGTH,
};
use std::collections::BTreeMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one response for the configured output format
pub fn render(message: &ServerMessage, game: &GameEngine, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => render_json(message),
        OutputFormat::Text => render_text(message, game),
    }
}

fn render_json(message: &ServerMessage) -> String {
    serde_json::to_string(message)
        .unwrap_or_else(|e| format!(r#"{{"error":"failed to encode response: {e}"}}"#))
}

fn render_text(message: &ServerMessage, game: &GameEngine) -> String {
    match message {
        ServerMessage::GameStarted { .. } => format!(
            "New game! Guess the {WORD_LENGTH} letter word in {MAX_ATTEMPTS} tries.\n{}",
            render_board(game.history())
        ),
        ServerMessage::GuessRejected { message, .. } => message.to_string(),
        ServerMessage::GuessAccepted { report } => {
            let mut out = render_board(game.history());
            out.push('\n');
            out.push_str(&render_keyboard(&game.letter_hints()));
            if let Some(status) = outcome_message(report) {
                out.push('\n');
                out.push_str(&status);
            }
            out
        }
    }
}

/// Status line shown once a game has ended
pub fn outcome_message(report: &GuessReport) -> Option<String> {
    match report.outcome {
        GameOutcome::Won => Some("Congratulations! You won!".to_string()),
        GameOutcome::Lost => Some(format!(
            "Game over! The word was {}",
            report.revealed_secret.as_deref().unwrap_or("?")
        )),
        GameOutcome::InProgress => None,
    }
}

fn render_board(history: &[ScoredGuess]) -> String {
    let mut rows: Vec<String> = history.iter().map(render_row).collect();
    let empty_row = vec!["[ ]"; WORD_LENGTH].join(" ");
    rows.resize(MAX_ATTEMPTS, empty_row);
    rows.join("\n")
}

fn render_row(guess: &ScoredGuess) -> String {
    guess
        .letters
        .iter()
        .map(|l| paint(&format!("[{}]", l.letter), l.status))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_keyboard(hints: &BTreeMap<char, LetterStatus>) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| match hints.get(&key) {
                    Some(status) => paint(&key.to_string(), *status),
                    None => key.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(text: &str, status: LetterStatus) -> String {
    match status {
        LetterStatus::Correct => text.black().on_green().bold().to_string(),
        LetterStatus::Present => text.black().on_yellow().bold().to_string(),
        LetterStatus::Absent => text.white().on_bright_black().to_string(),
    }
}
