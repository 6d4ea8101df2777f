//! Chat command routing on top of [`GameSession`].
//!
//! Guesses never fail the handler: validation errors become replies and the
//! round keeps its attempt budget. Only a vocabulary that cannot supply a
//! secret word surfaces as [`BotError`].

use crate::chat::ChatMessage;
use crate::config::Settings;
use crate::error::{BotError, GameError};
use crate::reply::Reply;
use crate::session::{GameSession, SessionStatus};
use crate::store::{ConversationId, SessionStore};
use crate::word::WORD_LENGTH;
use crate::wordbank::WordSource;
use rand::Rng;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Hello,
    NewGame,
    Other(String),
}

impl Command {
    /// Parses `/name` or `/name@botname`; `None` for regular text.
    fn parse(text: &str) -> Option<Self> {
        let token = text.strip_prefix('/')?.split_whitespace().next().unwrap_or("");
        let name = token.split('@').next().unwrap_or(token);
        Some(match name {
            "hello" | "start" => Self::Hello,
            "new_game" => Self::NewGame,
            other => Self::Other(other.to_string()),
        })
    }
}

pub struct GameBot<R> {
    max_tries: NonZeroUsize,
    words: Arc<WordSource>,
    sessions: SessionStore,
    rng: R,
}

impl<R: Rng> GameBot<R> {
    /// `words` should already be loaded; games cannot start otherwise.
    pub fn new(settings: &Settings, words: Arc<WordSource>, rng: R) -> Self {
        Self {
            max_tries: settings.max_tries(),
            words,
            sessions: SessionStore::new(),
            rng,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn handle(&mut self, message: &ChatMessage) -> Result<Vec<Reply>, BotError> {
        if message.edited {
            log::debug!("Ignoring edited message in '{}'", message.conversation);
            return Ok(Vec::new());
        }
        let id = &message.conversation;
        match Command::parse(&message.text) {
            Some(Command::Hello) => Ok(vec![Reply::Greeting]),
            Some(Command::NewGame) => Ok(vec![self.new_game(id)?]),
            Some(Command::Other(name)) => {
                log::debug!("Ignoring unknown command /{name} in '{id}'");
                Ok(Vec::new())
            }
            None => self.guess(id, &message.text),
        }
    }

    /// Replaces the conversation's session with a fresh one.
    fn new_game(&mut self, id: &ConversationId) -> Result<Reply, BotError> {
        let session = GameSession::start(&self.words, &mut self.rng, self.max_tries)?;
        if self.sessions.insert(id.clone(), session).is_some() {
            log::debug!("Replaced running session in '{id}'");
        }
        log::info!("New game in '{id}'");
        Ok(Reply::NewGame {
            max_tries: self.max_tries.get(),
            word_length: WORD_LENGTH,
        })
    }

    fn guess(&mut self, id: &ConversationId, text: &str) -> Result<Vec<Reply>, BotError> {
        let max_tries = self.max_tries;
        let played = {
            let words = &self.words;
            let rng = &mut self.rng;
            let session = self.sessions.get_or_try_insert_with(id, || {
                log::info!("Starting implicit game in '{id}'");
                GameSession::start(words, rng, max_tries)
            })?;
            session.submit_guess(text).map(|guess| match session.status() {
                SessionStatus::Won => Reply::Won {
                    guess,
                    tries_used: session.tries_used(),
                },
                SessionStatus::Lost => Reply::Lost {
                    guess,
                    secret: session.secret().clone(),
                },
                SessionStatus::Active => Reply::Progress {
                    guess,
                    tries_remaining: session.tries_remaining(),
                },
            })
        };

        let reply = match played {
            Ok(reply) => {
                if matches!(reply, Reply::Won { .. }) {
                    self.sessions.remove(id);
                }
                reply
            }
            Err(GameError::SessionAlreadyEnded) => {
                return Ok(vec![Reply::PreviousGameEnded, self.new_game(id)?]);
            }
            Err(GameError::WordLengthMismatch { got, expected }) => {
                log::debug!("Rejected guess of {got} letters in '{id}'");
                Reply::WrongLength { got, expected }
            }
            Err(GameError::InvalidAlphabet { word }) => {
                log::debug!("Rejected non-alphabet guess '{word}' in '{id}'");
                Reply::NotInAlphabet
            }
        };
        Ok(vec![reply])
    }
}
