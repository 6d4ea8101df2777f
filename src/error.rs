use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections produced by [`GameSession::submit_guess`](crate::session::GameSession::submit_guess).
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("expected a word of {expected} letters, got {got}")]
    WordLengthMismatch { got: usize, expected: usize },
    #[error("'{word}' contains characters outside the alphabet")]
    InvalidAlphabet { word: String },
    #[error("the session has already ended")]
    SessionAlreadyEnded,
}

/// The vocabulary could not provide a word.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("vocabulary unavailable: not loaded")]
    NotLoaded,
    #[error("vocabulary unavailable: no usable words")]
    Empty,
    #[error("vocabulary unavailable: cannot read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max tries must be a positive integer, got {0}")]
    InvalidMaxTries(i64),
    #[error("max tries must be an integer, got '{0}'")]
    UnparsableMaxTries(String),
}

/// Failures the bot cannot turn into a regular reply.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("cannot start a game: {0}")]
    Vocabulary(#[from] WordSourceError),
}

/// Startup failures reported by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Vocabulary(#[from] WordSourceError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
