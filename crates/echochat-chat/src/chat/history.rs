use echochat_types::Message;
use std::ops::Index;

/// Ordered, append-only list of displayed messages.
///
/// Render order is insertion order. Entries are never edited or removed,
/// so the length only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    entries: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Only the screen that owns the log may do this.
    pub(crate) fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    /// Display texts in render order
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(Message::text).collect()
    }

    /// Serialize the log as a JSON array of messages
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.entries)
        } else {
            serde_json::to_string(&self.entries)
        }
    }
}

impl Index<usize> for ConversationLog {
    type Output = Message;

    fn index(&self, index: usize) -> &Message {
        &self.entries[index]
    }
}
