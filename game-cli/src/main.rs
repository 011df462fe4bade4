use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

use game_cli::{Config, GameSession, Input, parse_input, render::render};
use game_core::Dictionary;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Game output goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .init();

    let dictionary = match &config.words_file {
        Some(path) => {
            info!("Loading words from file: {}", path.display());
            Dictionary::from_file(path)
                .with_context(|| format!("Failed to load word list from {}", path.display()))?
        }
        None => Dictionary::embedded().context("Embedded word list is unusable")?,
    };
    info!("Dictionary ready with {} words", dictionary.len());

    let mut session = GameSession::new(Arc::new(dictionary), config.seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "{}",
        render(&session.started(), session.game(), config.output_format)
    )?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let message = match parse_input(&line) {
            Input::Quit => break,
            Input::Message(message) => message,
        };

        let response = session.handle_message(message);
        writeln!(
            stdout,
            "{}",
            render(&response, session.game(), config.output_format)
        )?;
        stdout.flush()?;
    }

    info!("Goodbye");
    Ok(())
}
