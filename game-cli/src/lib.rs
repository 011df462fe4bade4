pub mod config;
pub mod render;
pub mod session;

pub use config::{Config, OutputFormat};
pub use session::{GameSession, Input, parse_input};
