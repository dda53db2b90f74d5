//! Error types for core module
//!
//! Covers settings persistence and engine errors surfacing while the driver
//! plays a game.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The engine produced or was handed a move it would not accept
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
