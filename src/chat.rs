use crate::bot::GameBot;
use crate::reply::Reply;
use crate::store::ConversationId;
use chrono::{DateTime, Local};
use rand::Rng;

/// One incoming chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub conversation: ConversationId,
    pub text: String,
    pub edited: bool,
    pub received_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(conversation: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation,
            text: text.into(),
            edited: false,
            received_at: Local::now(),
        }
    }

    pub fn edited(mut self) -> Self {
        self.edited = true;
        self
    }
}

#[derive(Debug)]
pub enum UserAction {
    Message(ChatMessage),
    Exit,
}

/// A chat transport the bot can be driven through.
pub trait ChatInterface {
    /// Next incoming action, or `None` when there is nothing to process yet.
    fn read_message(&mut self) -> Option<UserAction>;
    fn send_reply(&mut self, conversation: &ConversationId, reply: &Reply);
    fn display_exit_message(&mut self);
}

/// Feeds messages from `interface` to `bot` until the user exits.
///
/// Bot failures are logged and answered with [`Reply::Failure`]; the loop keeps running.
pub fn chat_loop<R: Rng, I: ChatInterface + ?Sized>(bot: &mut GameBot<R>, interface: &mut I) {
    loop {
        let message = match interface.read_message() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::Message(message)) => message,
            None => continue,
        };

        match bot.handle(&message) {
            Ok(replies) => {
                for reply in &replies {
                    interface.send_reply(&message.conversation, reply);
                }
            }
            Err(e) => {
                log::error!("Failed to handle message in '{}': {e}", message.conversation);
                interface.send_reply(&message.conversation, &Reply::Failure);
            }
        }
    }
}
