//! Driver errors.

use thiserror::Error;

use skirmish_levels::LevelError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load levels: {0}")]
    Levels(#[from] LevelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unknown input {0:?}")]
    UnknownInput(String),

    #[error("invalid tilt value {0:?}")]
    InvalidTilt(String),

    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotRunning,

    #[error("game loop has stopped")]
    LoopStopped,

    #[error("shared state lock poisoned")]
    Poisoned,
}
