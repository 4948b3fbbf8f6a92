use echochat_types::Message;

use super::history::ConversationLog;
use super::input::InputBuffer;
use crate::responder::{EchoResponder, Responder, ResponderKind};

/// Outcome of a send action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The buffer was blank; nothing changed
    Ignored,
    /// Two entries were appended, user first
    Sent { user: Message, reply: Message },
}

impl Submission {
    pub fn is_sent(&self) -> bool {
        matches!(self, Submission::Sent { .. })
    }
}

/// State holder for a single chat screen.
///
/// Owns the conversation log and the input buffer. It has no rendering
/// dependency; see [`crate::ChatView`] for the adapter that pushes entries
/// to a display surface.
pub struct ChatScreen {
    log: ConversationLog,
    input: InputBuffer,
    responder: Box<dyn Responder>,
}

impl ChatScreen {
    /// Create a screen that echoes submissions back
    pub fn new() -> Self {
        Self::with_responder(EchoResponder)
    }

    pub fn with_responder(responder: impl Responder + 'static) -> Self {
        Self::with_boxed_responder(Box::new(responder))
    }

    pub fn with_kind(kind: ResponderKind) -> Self {
        Self::with_boxed_responder(kind.into_responder())
    }

    fn with_boxed_responder(responder: Box<dyn Responder>) -> Self {
        let mut screen = Self {
            log: ConversationLog::new(),
            input: InputBuffer::new(),
            responder,
        };
        screen.initialize();
        screen
    }

    /// Show the greeting. Runs exactly once per screen, at construction.
    fn initialize(&mut self) {
        self.log.push(Message::welcome());
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// Replace the text field contents
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    /// Whether a send action would append anything
    pub fn can_send(&self) -> bool {
        !self.input.is_blank()
    }

    /// Handle the send action.
    ///
    /// A blank buffer is ignored and left as typed. Otherwise the user entry
    /// is appended, the buffer is cleared and the reply entry follows.
    pub fn submit(&mut self) -> Submission {
        if self.input.is_blank() {
            return Submission::Ignored;
        }

        let text = self.input.trimmed().to_string();

        let user = Message::from_user(&text);
        self.log.push(user.clone());
        self.input.clear();

        let reply = Message::from_bot(&self.responder.reply(&text));
        self.log.push(reply.clone());

        log::debug!("submitted {} chars, log now has {} entries", text.chars().count(), self.log.len());

        Submission::Sent { user, reply }
    }
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}
