//! Conversation state for echochat
//!
//! This crate provides the chat screen state holder, the reply strategies
//! and the rendering adapter that forwards new entries to a display sink.

pub mod chat;
pub mod display;
pub mod responder;
pub mod view;

// Re-export commonly used types
pub use chat::history::ConversationLog;
pub use chat::input::{trim_blanks, InputBuffer};
pub use chat::screen::{ChatScreen, Submission};
pub use display::{DisplayError, DisplaySink, RecordingSink};
pub use echochat_types::Message;
pub use responder::{EchoResponder, ParseResponderError, PendingModelResponder, Responder, ResponderKind};
pub use view::ChatView;
