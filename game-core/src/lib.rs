pub mod dictionary;
pub mod game_state;
pub mod scoring;
pub mod word;

// Re-export main components
pub use dictionary::*;
pub use game_state::*;
pub use scoring::*;
pub use word::*;
