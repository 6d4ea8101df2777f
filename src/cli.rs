use crate::chat::{ChatInterface, ChatMessage, UserAction};
use crate::debug_log;
use crate::reply::Reply;
use crate::store::ConversationId;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Conversation used for lines without an `@name` prefix.
pub const LOCAL_CONVERSATION: &str = "local";

/// Wordle chat bot options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input", env = "WORDLE_WORDBANK")]
    pub wordbank_path: Option<PathBuf>,

    /// Attempts allowed per round [default: 5]
    #[arg(long, env = "GAME_MAX_TRIES", allow_negative_numbers = true)]
    pub max_tries: Option<i64>,

    /// Use the terminal UI instead of the line-based chat
    #[arg(long)]
    pub tui: bool,

    /// Seed for secret word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Splits an optional `@conversation` prefix off a chat line.
fn parse_line(line: &str) -> (ConversationId, &str) {
    if let Some(rest) = line.strip_prefix('@')
        && let Some((name, text)) = rest.split_once(char::is_whitespace)
        && !name.is_empty()
    {
        return (ConversationId::new(name), text.trim_start());
    }
    (ConversationId::new(LOCAL_CONVERSATION), line)
}

/// Line-based chat: every input line is one message, every reply is printed.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            log::warn!("Failed to write to output: {e}");
        }
    }
}

impl<R: BufRead, W: Write> ChatInterface for CliInterface<R, W> {
    fn read_message(&mut self) -> Option<UserAction> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => return Some(UserAction::Exit),
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {e}");
                return Some(UserAction::Exit);
            }
        }
        let line = input.trim();
        debug_log!("CliInterface::read_message() - line: '{}'", line);

        if line.is_empty() {
            return None;
        }
        if line.eq_ignore_ascii_case("exit") {
            return Some(UserAction::Exit);
        }
        let (conversation, text) = parse_line(line);
        Some(UserAction::Message(ChatMessage::new(conversation, text)))
    }

    fn send_reply(&mut self, conversation: &ConversationId, reply: &Reply) {
        let text = if conversation.as_str() == LOCAL_CONVERSATION {
            reply.to_string()
        } else {
            format!("[{conversation}] {reply}")
        };
        self.print(&text);
    }

    fn display_exit_message(&mut self) {
        self.print("Exiting.");
    }
}
