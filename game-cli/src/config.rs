use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub words_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub output_format: OutputFormat,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, environment or otherwise
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let words_file = lookup("WORDS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let seed = lookup("GAME_SEED")
            .map(|v| v.trim().parse::<u64>().context("Invalid GAME_SEED"))
            .transpose()?;

        let output_format = match lookup("OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .to_lowercase()
            .as_str()
        {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => bail!("Invalid OUTPUT_FORMAT: {other} (expected text or json)"),
        };

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "warn".to_string())
            .parse::<Level>()
            .context("Invalid LOG_LEVEL")?;

        Ok(Self {
            words_file,
            seed,
            output_format,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: None,
            seed: None,
            output_format: OutputFormat::Text,
            log_level: Level::WARN,
        }
    }
}
