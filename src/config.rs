use crate::cli::Cli;
use crate::error::ConfigError;
use crate::wordbank::WordOrigin;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_TRIES: usize = 5;

/// Lowercase key read when neither `--max-tries` nor `GAME_MAX_TRIES` is set.
pub const LEGACY_MAX_TRIES_ENV: &str = "game_max_tries";

const APP_DIR: &str = "wordle-chat";
const USER_WORDBANK_FILE: &str = "words.txt";

/// Runtime settings, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    max_tries: NonZeroUsize,
    word_origin: WordOrigin,
}

impl Settings {
    pub fn new(max_tries: i64, word_origin: WordOrigin) -> Result<Self, ConfigError> {
        let max_tries = usize::try_from(max_tries)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidMaxTries(max_tries))?;
        Ok(Self {
            max_tries,
            word_origin,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let origin = resolve_word_origin(cli.wordbank_path.as_deref(), user_wordbank_path());
        let legacy = std::env::var(LEGACY_MAX_TRIES_ENV).ok();
        Self::new(resolve_max_tries(cli.max_tries, legacy.as_deref())?, origin)
    }

    pub fn max_tries(&self) -> NonZeroUsize {
        self.max_tries
    }

    pub fn word_origin(&self) -> &WordOrigin {
        &self.word_origin
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_tries: NonZeroUsize::new(DEFAULT_MAX_TRIES).unwrap_or(NonZeroUsize::MIN),
            word_origin: WordOrigin::Embedded,
        }
    }
}

/// The flag (or `GAME_MAX_TRIES`) wins, then the legacy key, then the default.
pub fn resolve_max_tries(flag: Option<i64>, legacy: Option<&str>) -> Result<i64, ConfigError> {
    if let Some(value) = flag {
        return Ok(value);
    }
    match legacy {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnparsableMaxTries(raw.to_string())),
        None => Ok(DEFAULT_MAX_TRIES as i64),
    }
}

/// `<data dir>/wordle-chat/words.txt`, if the platform has a data dir.
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(USER_WORDBANK_FILE))
}

/// An explicit path wins, then an existing user wordbank, then the embedded list.
pub fn resolve_word_origin(explicit: Option<&Path>, user_file: Option<PathBuf>) -> WordOrigin {
    if let Some(path) = explicit {
        return WordOrigin::File(path.to_path_buf());
    }
    match user_file {
        Some(path) if path.is_file() => WordOrigin::File(path),
        _ => WordOrigin::Embedded,
    }
}
