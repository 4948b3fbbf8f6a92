use colored::Colorize;
use std::io::{self, Stdout, Write};

use echochat_chat::{DisplayError, DisplaySink, Message};
use echochat_types::EntryStyle;

/// Display sink that writes one line per entry to a terminal.
///
/// Horizontal padding becomes spaces around the text. With color on, the
/// padded line is painted with the entry background.
pub struct TerminalSink<W: Write> {
    out: W,
    style: EntryStyle,
    color: bool,
}

impl TerminalSink<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self::with_style(out, EntryStyle::DEFAULT, color)
    }

    pub fn with_style(out: W, style: EntryStyle, color: bool) -> Self {
        Self { out, style, color }
    }

    /// The entry line without trailing newline
    pub fn format_entry(&self, message: &Message) -> String {
        let (left, right) = self.style.padding_columns();
        let line = format!("{}{}{}", " ".repeat(left), message.text(), " ".repeat(right));

        if self.color {
            let bg = self.style.background;
            line.black()
                .on_truecolor(bg.red(), bg.green(), bg.blue())
                .to_string()
        } else {
            line
        }
    }

    /// Write a raw line outside the entry style (banners, command output)
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, message: &Message) -> Result<(), DisplayError> {
        let (above, below) = self.style.margin_lines();
        let line = self.format_entry(message);

        for _ in 0..above {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", line)?;
        for _ in 0..below {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
