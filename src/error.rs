//! Error types
//!
//! Gameplay itself is total; only configuration and world construction can fail.

use thiserror::Error;

/// Errors raised while loading configuration or building a world
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No free cell left for {what} ({placed} of {wanted} placed)")]
    BoardFull {
        what: &'static str,
        placed: usize,
        wanted: usize,
    },

    #[error("Failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
