//! Single-round game state.
//!
//! # State Machine
//! - `Active` → `Won` when a guess matches every position
//! - `Active` → `Lost` when the last allowed attempt misses
//!
//! Both terminal states reject further guesses with
//! [`GameError::SessionAlreadyEnded`]; callers start a new session instead.

use crate::error::{GameError, WordSourceError};
use crate::guess::GuessResult;
use crate::word::Word;
use crate::wordbank::WordSource;
use rand::Rng;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won,
    Lost,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One secret word, an attempt budget and the append-only guess history.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    max_tries: NonZeroUsize,
    guesses: Vec<GuessResult>,
}

impl GameSession {
    pub fn new(secret: Word, max_tries: NonZeroUsize) -> Self {
        Self {
            secret,
            max_tries,
            guesses: Vec::new(),
        }
    }

    /// Starts a session with a secret drawn from a loaded `source`.
    pub fn start<R: Rng + ?Sized>(
        source: &WordSource,
        rng: &mut R,
        max_tries: NonZeroUsize,
    ) -> Result<Self, WordSourceError> {
        let secret = source.random_word(rng)?;
        log::debug!("New session started with {max_tries} tries");
        Ok(Self::new(secret, max_tries))
    }

    /// Validates and evaluates one guess, consuming an attempt only on success.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GameError> {
        if self.is_over() {
            return Err(GameError::SessionAlreadyEnded);
        }
        let guess = Word::parse(raw)?;
        let result = GuessResult::evaluate(&guess, &self.secret);
        self.guesses.push(result.clone());

        match self.status() {
            SessionStatus::Won => log::info!("Word guessed in {} tries", self.tries_used()),
            SessionStatus::Lost => log::info!("Tries exhausted, secret was '{}'", self.secret),
            SessionStatus::Active => log::debug!(
                "Guess '{}' accepted, {} tries left",
                result.word(),
                self.tries_remaining()
            ),
        }
        Ok(result)
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_solved() {
            SessionStatus::Won
        } else if self.tries_used() >= self.max_tries.get() {
            SessionStatus::Lost
        } else {
            SessionStatus::Active
        }
    }

    pub fn is_solved(&self) -> bool {
        self.guesses.last().is_some_and(GuessResult::is_correct)
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn tries_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn tries_remaining(&self) -> usize {
        self.max_tries.get().saturating_sub(self.tries_used())
    }

    pub fn max_tries(&self) -> NonZeroUsize {
        self.max_tries
    }

    pub fn history(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn last_guess(&self) -> Option<&GuessResult> {
        self.guesses.last()
    }

    pub(crate) fn secret(&self) -> &Word {
        &self.secret
    }

    /// The secret word, only once the session is over.
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.is_over().then_some(&self.secret)
    }
}
