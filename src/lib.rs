// Library interface for wordle-chat
// The binary and the integration tests both go through these modules

pub mod bot;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod guess;
pub mod logging;
pub mod reply;
pub mod session;
pub mod store;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use bot::GameBot;
pub use chat::{ChatInterface, ChatMessage, UserAction, chat_loop};
pub use config::Settings;
pub use error::{AppError, BotError, ConfigError, GameError, WordSourceError};
pub use guess::{GuessResult, LetterMark};
pub use reply::Reply;
pub use session::{GameSession, SessionStatus};
pub use store::{ConversationId, SessionStore};
pub use word::{RUSSIAN_ALPHABET, WORD_LENGTH, Word};
pub use wordbank::{WordOrigin, WordSource, load_wordbank_from_file, load_wordbank_from_str};
