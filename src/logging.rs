use crate::error::AppError;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const LOG_FILE: &str = "wordle-chat.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal.
    File(PathBuf),
}

/// Default filter for a `-v` count. `RUST_LOG` overrides it.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `<cache dir>/wordle-chat/wordle-chat.log`
pub fn tui_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wordle-chat").join(LOG_FILE))
}

pub fn init(verbosity: u8, target: &LogTarget) -> Result<(), AppError> {
    let env = env_logger::Env::default().default_filter_or(level_for(verbosity));
    let mut builder = env_logger::Builder::from_env(env);
    if let LogTarget::File(path) = target {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

// Conditional logging macro - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}
