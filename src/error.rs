//! Error types shared by the game core, the wire protocol and configuration.

use thiserror::Error;

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A turn command outside `turnUp` / `turnDown` / `turnLeft` / `turnRight`.
    #[error("invalid direction command: {0:?}")]
    InvalidCommand(String),
}

/// Errors raised while decoding client frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("unrecognized client message: {0:?}")]
    UnknownMessage(String),
}

/// Errors raised while resolving the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
