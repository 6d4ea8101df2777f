//! TUI (Terminal User Interface) chat window for the game bot
//!
//! # Layout
//! - Board: colored feedback rows of the current round
//! - Chat: timestamped conversation log
//! - Input line and key help
//!
//! The interface talks to a single conversation. Every submitted line goes to
//! the bot unchanged, so commands like `/new_game` work as in any chat.

use crate::chat::{ChatInterface, ChatMessage, UserAction};
use crate::debug_log;
use crate::guess::{GuessResult, LetterMark};
use crate::reply::Reply;
use crate::store::ConversationId;
use chrono::{DateTime, Local};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_CHARS: usize = 32;
const BOARD_HEIGHT: u16 = 14;
const ROW_SPACING: u16 = 2;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const USER_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const BOT_STYLE: Style = Style::new().fg(Color::Cyan);
const TIME_STYLE: Style = Style::new().fg(Color::DarkGray);

fn mark_colors(mark: LetterMark) -> (Color, Color) {
    match mark {
        LetterMark::Exact => (Color::Green, Color::Black),
        LetterMark::Present => (Color::Yellow, Color::Black),
        LetterMark::Absent => (Color::Gray, Color::White),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    User,
    Bot,
}

#[derive(Debug)]
struct LogEntry {
    at: DateTime<Local>,
    speaker: Speaker,
    text: String,
}

/// Screen state, kept apart from the terminal so it can be updated without drawing.
#[derive(Debug, Default)]
struct ChatView {
    board: Vec<GuessResult>,
    round_finished: bool,
    log: Vec<LogEntry>,
    input: String,
    status: String,
}

impl ChatView {
    fn push_log(&mut self, speaker: Speaker, text: String) {
        self.log.push(LogEntry {
            at: Local::now(),
            speaker,
            text,
        });
    }

    fn apply_reply(&mut self, reply: &Reply) {
        match reply {
            Reply::NewGame { max_tries, .. } => {
                self.board.clear();
                self.round_finished = false;
                self.status = format!("New round - {max_tries} tries");
            }
            Reply::Won { tries_used, .. } => {
                self.status = format!("Solved in {tries_used} tries - /new_game to play again");
            }
            Reply::Lost { secret, .. } => {
                self.status = format!("Out of tries, the word was {}", secret.to_uppercase());
            }
            Reply::Progress {
                tries_remaining, ..
            } => {
                self.status = format!("{tries_remaining} tries left");
            }
            _ => {}
        }

        if let Some(guess) = reply.guess() {
            // A guess after a finished round belongs to a new, implicitly started round
            if self.round_finished {
                self.board.clear();
                self.round_finished = false;
            }
            self.board.push(guess.clone());
            self.round_finished = reply.ends_round();
        }

        let text = match reply {
            // The board already shows the evaluated letters
            Reply::Progress {
                tries_remaining, ..
            } => format!("Не угадали. Осталось попыток: {tries_remaining}"),
            other => other.to_string(),
        };
        self.push_log(Speaker::Bot, text);
    }

    /// Handles one key press; returns an action when the user submits or quits.
    fn handle_key(&mut self, key: KeyEvent, conversation: &ConversationId) -> Option<UserAction> {
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(UserAction::Exit);
            }
            debug_log!("ChatView::handle_key() - Ignoring key with modifier: {:?}", key);
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Enter => {
                let text = self.input.trim().to_string();
                self.input.clear();
                if text.is_empty() {
                    return None;
                }
                self.push_log(Speaker::User, text.clone());
                Some(UserAction::Message(ChatMessage::new(
                    conversation.clone(),
                    text,
                )))
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c)
                if !c.is_control() && c != '\u{FFFD}' && self.input.chars().count() < MAX_INPUT_CHARS =>
            {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    conversation: ConversationId,
    view: ChatView,
}

impl TuiInterface {
    pub fn new(conversation: ConversationId) -> Result<Self, io::Error> {
        log::info!("Initializing TUI for '{conversation}'");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            conversation,
            view: ChatView {
                status: "Type /new_game or just a word".to_string(),
                ..ChatView::default()
            },
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        let view = &self.view;
        if let Err(e) = self.terminal.draw(|f| render(f, view)) {
            log::warn!("Draw error: {e}");
        }
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("TuiInterface::poll_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl ChatInterface for TuiInterface {
    fn read_message(&mut self) -> Option<UserAction> {
        self.draw_or_log();
        match self.poll_key() {
            Ok(Some(key)) => self.view.handle_key(key, &self.conversation),
            Ok(None) => None,
            Err(e) => {
                log::error!("Failed to read terminal event: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn send_reply(&mut self, _conversation: &ConversationId, reply: &Reply) {
        self.view.apply_reply(reply);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.view.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render(f: &mut Frame, view: &ChatView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Min(6),               // Chat log
            Constraint::Length(3),            // Input
            Constraint::Length(3),            // Status
        ])
        .split(f.area());

    let title = Paragraph::new("WORDLE CHAT")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], &view.board);
    render_log(f, chunks[2], &view.log);

    let input = Paragraph::new(format!("> {}_", view.input))
        .block(Block::default().borders(Borders::ALL).title("Message"));
    f.render_widget(input, chunks[3]);

    let status = Paragraph::new(format!("{} | ENTER: Send | ESC: Quit", view.status))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[4]);
}

fn board_line(guess: &GuessResult) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (letter, mark) in guess.marks() {
        let (bg, fg) = mark_colors(mark);
        spans.push(Span::styled(
            format!(" {} ", letter.to_uppercase()),
            Style::default().fg(fg).bg(bg),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, area: Rect, board: &[GuessResult]) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Most recent rows win when the board overflows
    let available_rows = (inner.height / ROW_SPACING) as usize;
    let skip = board.len().saturating_sub(available_rows);
    for (row, guess) in board.iter().skip(skip).enumerate() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        let y = inner.y + offset * ROW_SPACING;
        if y >= inner.y + inner.height {
            break;
        }
        let line_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        f.render_widget(Paragraph::new(board_line(guess)), line_area);
    }
}

fn render_log(f: &mut Frame, area: Rect, log: &[LogEntry]) {
    let mut lines = Vec::new();
    for entry in log {
        let (who, style) = match entry.speaker {
            Speaker::User => ("you", USER_STYLE),
            Speaker::Bot => ("bot", BOT_STYLE),
        };
        for (i, text) in entry.text.lines().enumerate() {
            let prefix = if i == 0 {
                format!("{} {who}: ", entry.at.format("%H:%M"))
            } else {
                " ".repeat(11)
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, TIME_STYLE),
                Span::styled(text.to_string(), style),
            ]));
        }
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Chat").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn guess(word: &str) -> GuessResult {
        GuessResult::evaluate(&Word::parse(word).unwrap(), &Word::parse("забор").unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut view = ChatView::default();
        let id = ConversationId::new("tui");
        for c in "игрок".chars() {
            assert!(view.handle_key(key(KeyCode::Char(c)), &id).is_none());
        }
        view.handle_key(key(KeyCode::Backspace), &id);
        view.handle_key(key(KeyCode::Char('к')), &id);
        match view.handle_key(key(KeyCode::Enter), &id) {
            Some(UserAction::Message(message)) => {
                assert_eq!(message.text, "игрок");
                assert_eq!(message.conversation, id);
            }
            other => panic!("Expected message, got {other:?}"),
        }
        assert!(view.input.is_empty());
        assert_eq!(view.log.len(), 1);
        assert_eq!(view.log[0].speaker, Speaker::User);
    }

    #[test]
    fn test_empty_enter_sends_nothing() {
        let mut view = ChatView::default();
        let id = ConversationId::new("tui");
        assert!(view.handle_key(key(KeyCode::Enter), &id).is_none());
        assert!(view.log.is_empty());
    }

    #[test]
    fn test_escape_and_ctrl_c_exit() {
        let mut view = ChatView::default();
        let id = ConversationId::new("tui");
        assert!(matches!(
            view.handle_key(key(KeyCode::Esc), &id),
            Some(UserAction::Exit)
        ));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(view.handle_key(ctrl_c, &id), Some(UserAction::Exit)));
    }

    #[test]
    fn test_input_is_capped() {
        let mut view = ChatView::default();
        let id = ConversationId::new("tui");
        for _ in 0..(MAX_INPUT_CHARS + 5) {
            view.handle_key(key(KeyCode::Char('а')), &id);
        }
        assert_eq!(view.input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_board_follows_rounds() {
        let mut view = ChatView::default();
        view.apply_reply(&Reply::NewGame {
            max_tries: 5,
            word_length: 5,
        });
        view.apply_reply(&Reply::Progress {
            guess: guess("игрок"),
            tries_remaining: 4,
        });
        view.apply_reply(&Reply::WrongLength {
            got: 3,
            expected: 5,
        });
        view.apply_reply(&Reply::Won {
            guess: guess("забор"),
            tries_used: 2,
        });
        assert_eq!(view.board.len(), 2);
        assert!(view.round_finished);

        // Next round started implicitly by a plain guess
        view.apply_reply(&Reply::Progress {
            guess: guess("книга"),
            tries_remaining: 4,
        });
        assert_eq!(view.board.len(), 1);
        assert_eq!(view.log.len(), 5);
    }

    #[test]
    fn test_board_line_colors_marks() {
        let line = board_line(&guess("игрок"));
        // Leading padding, then letter/space pairs
        assert_eq!(line.spans.len(), 11);
        assert_eq!(line.spans[7].content, " О ");
        assert_eq!(line.spans[7].style.bg, Some(Color::Green));
        assert_eq!(line.spans[5].style.bg, Some(Color::Yellow));
        assert_eq!(line.spans[1].style.bg, Some(Color::Gray));
    }
}
