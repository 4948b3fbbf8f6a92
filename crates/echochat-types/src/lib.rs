//! Core types and display literals for echochat
//!
//! This crate provides the message type and the fixed presentation contract
//! shared by every echochat front end.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Display Literals
// ============================================================================

/// Greeting shown once when a screen opens
pub const WELCOME_TEXT: &str = "Xin chào! Đây là app chat đơn giản.";

/// Label prepended to user-authored entries
pub const USER_LABEL: &str = "Bạn: ";

/// Label prepended to generated replies
pub const BOT_LABEL: &str = "Bot: ";

/// Prefix of the echo reply, followed by the submitted text
pub const ECHO_REPLY_PREFIX: &str = "Tôi đã nhận được tin nhắn: ";

/// Prefix of the placeholder reply used while no model is wired in
pub const PENDING_MODEL_REPLY_PREFIX: &str = "Model đang được tích hợp... Phản hồi cho: ";

/// Screen header
pub const SCREEN_TITLE: &str = "Local LLM Chat";

/// Hint shown in an empty text field
pub const INPUT_PLACEHOLDER: &str = "Nhập tin nhắn...";

/// Caption of the send trigger
pub const SEND_LABEL: &str = "Gửi";

// ============================================================================
// Message Types
// ============================================================================

/// A single rendered chat line.
///
/// Messages carry only their display text. They are built once and never
/// mutated, so the text field is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The fixed greeting entry
    pub fn welcome() -> Self {
        Self::new(WELCOME_TEXT)
    }

    /// Entry for text the user submitted (already trimmed)
    pub fn from_user(text: &str) -> Self {
        Self::new(format!("{}{}", USER_LABEL, text))
    }

    /// Entry for a generated reply
    pub fn from_bot(reply: &str) -> Self {
        Self::new(format!("{}{}", BOT_LABEL, reply))
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Width of one terminal cell in layout units
pub const CELL_WIDTH_UNITS: u32 = 8;

/// Height of one terminal cell in layout units
pub const CELL_HEIGHT_UNITS: u32 = 16;

/// Edge sizes in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    /// CSS shorthand in top/right/bottom/left order
    pub fn to_css(&self) -> String {
        format!("{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

/// 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#RRGGBB`, alpha dropped
    pub fn to_css_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
    }
}

/// Visual style applied to every entry. No styling varies by sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStyle {
    pub text_size: u32,
    pub padding: Insets,
    pub margin: Insets,
    pub background: Argb,
}

impl EntryStyle {
    pub const DEFAULT: EntryStyle = EntryStyle {
        text_size: 16,
        padding: Insets::new(16, 8, 16, 8),
        margin: Insets::new(0, 4, 0, 4),
        background: Argb(0xFFE0E0E0),
    };

    /// Horizontal padding converted to terminal columns (left, right)
    pub fn padding_columns(&self) -> (usize, usize) {
        (
            (self.padding.left / CELL_WIDTH_UNITS) as usize,
            (self.padding.right / CELL_WIDTH_UNITS) as usize,
        )
    }

    /// Vertical margin converted to blank terminal lines (above, below).
    /// Margins smaller than a cell round down to nothing.
    pub fn margin_lines(&self) -> (usize, usize) {
        (
            (self.margin.top / CELL_HEIGHT_UNITS) as usize,
            (self.margin.bottom / CELL_HEIGHT_UNITS) as usize,
        )
    }
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
