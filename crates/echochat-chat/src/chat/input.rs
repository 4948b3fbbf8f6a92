/// Unsent text in the screen's text field.
///
/// Front ends write into it as the user types. Only a successful
/// submission clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole buffer, as a text field does on every edit
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Buffer contents without leading or trailing blanks.
    ///
    /// Blanks are space and every control character below it. Wider Unicode
    /// spaces such as U+00A0 or U+3000 count as text.
    pub fn trimmed(&self) -> &str {
        trim_blanks(&self.text)
    }

    /// True when nothing but blanks has been typed
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }
}

/// Strip leading and trailing chars at or below U+0020
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
