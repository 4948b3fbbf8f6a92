use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

use crate::config::AppConfig;
use crate::render::TerminalSink;
use echochat_chat::{trim_blanks, ChatScreen, ChatView, Submission};
use echochat_types::{SCREEN_TITLE, SEND_LABEL};

const HELP_TEXT: &str = "Commands:
  /help   - Show this help
  /log    - Show the whole conversation again
  /json   - Print the conversation as JSON
  exit    - Leave (also: quit, Ctrl-D)
Anything else is sent as a chat message.";

/// A single line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Log,
    Json,
    /// Raw line, handed to the input buffer untrimmed
    Send(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "exit" | "quit" => ReplCommand::Exit,
            "/help" => ReplCommand::Help,
            "/log" => ReplCommand::Log,
            "/json" => ReplCommand::Json,
            _ => ReplCommand::Send(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Apply one prompt line to the view
pub fn handle_line<W: Write>(view: &mut ChatView<TerminalSink<W>>, line: &str) -> Result<LineOutcome> {
    match ReplCommand::parse(line) {
        ReplCommand::Exit => return Ok(LineOutcome::Exit),
        ReplCommand::Help => {
            view.sink_mut().write_line(HELP_TEXT)?;
        }
        ReplCommand::Log => {
            view.replay().context("Failed to render conversation")?;
        }
        ReplCommand::Json => {
            let json = view
                .screen()
                .log()
                .to_json(true)
                .context("Failed to serialize conversation")?;
            view.sink_mut().write_line(&json)?;
        }
        ReplCommand::Send(text) => {
            view.screen_mut().set_input(text);
            let outcome = view.submit().context("Failed to render messages")?;
            if let Submission::Sent { .. } = outcome {
                log::debug!("{} entries in conversation", view.screen().log().len());
            }
        }
    }
    Ok(LineOutcome::Continue)
}

fn print_banner<W: Write>(sink: &mut TerminalSink<W>, config: &AppConfig) -> Result<()> {
    sink.write_line(&format!("{}", SCREEN_TITLE.bright_cyan().bold()))?;
    sink.write_line(&format!(
        "{}",
        format!(
            "Reply mode: {} • Press Enter to {} • Type '/help' for commands, 'exit' to quit",
            config.responder, SEND_LABEL
        )
        .bright_black()
    ))?;
    sink.write_line("")?;
    Ok(())
}

/// Run interactive REPL mode
pub fn run_repl_mode(config: &AppConfig) -> Result<()> {
    colored::control::set_override(config.color);

    let mut sink = TerminalSink::stdout(config.color);
    print_banner(&mut sink, config)?;

    let screen = ChatScreen::with_kind(config.responder);
    let mut view = ChatView::open(screen, sink).context("Failed to render welcome message")?;
    log::info!("chat screen opened with {} responder", config.responder);

    let mut rl = DefaultEditor::new().context("Failed to start line editor")?;
    let prompt = format!("{} ", ">".bright_green().bold());

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if !trim_blanks(&line).is_empty() {
                    rl.add_history_entry(line.as_str())
                        .context("Failed to record input history")?;
                }
                if handle_line(&mut view, &line)? == LineOutcome::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    view.sink_mut().write_line(&format!("{}", "Goodbye!".bright_cyan()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use echochat_types::WELCOME_TEXT;

    fn open_view() -> ChatView<TerminalSink<Vec<u8>>> {
        ChatView::open(ChatScreen::new(), TerminalSink::new(Vec::new(), false)).unwrap()
    }

    fn output(view: &ChatView<TerminalSink<Vec<u8>>>) -> String {
        String::from_utf8(view.sink().get_ref().clone()).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse("  quit "), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/log"), ReplCommand::Log);
        assert_eq!(ReplCommand::parse("/json"), ReplCommand::Json);
        assert_eq!(ReplCommand::parse(" hi "), ReplCommand::Send(" hi ".to_string()));
        assert_eq!(ReplCommand::parse("/nope"), ReplCommand::Send("/nope".to_string()));
    }

    #[test]
    fn test_send_renders_user_and_reply() {
        let mut view = open_view();
        assert_eq!(handle_line(&mut view, "  Hello  ").unwrap(), LineOutcome::Continue);

        assert_eq!(
            output(&view),
            format!(
                "  {}  \n  Bạn: Hello  \n  Bot: Tôi đã nhận được tin nhắn: Hello  \n",
                WELCOME_TEXT
            )
        );
    }

    #[test]
    fn test_blank_line_renders_nothing() {
        let mut view = open_view();
        let before = output(&view);

        handle_line(&mut view, "   ").unwrap();

        assert_eq!(output(&view), before);
        assert_eq!(view.screen().input().as_str(), "   ");
    }

    #[test]
    fn test_wide_spaces_are_sent_and_controls_trimmed() {
        let mut view = open_view();
        handle_line(&mut view, "\u{3000}").unwrap();
        assert_eq!(view.screen().log()[1].text(), "Bạn: \u{3000}");

        handle_line(&mut view, "\u{1}hi\u{1}").unwrap();
        assert_eq!(view.screen().log()[3].text(), "Bạn: hi");
        assert_eq!(view.screen().log().len(), 5);
    }

    #[test]
    fn test_log_replays_conversation() {
        let mut view = open_view();
        handle_line(&mut view, "a").unwrap();
        let first = output(&view);

        handle_line(&mut view, "/log").unwrap();

        assert_eq!(output(&view), format!("{}{}", first, first));
        assert_eq!(view.screen().log().len(), 3);
    }

    #[test]
    fn test_json_dump() {
        let mut view = open_view();
        handle_line(&mut view, "a").unwrap();
        let before = output(&view).len();

        handle_line(&mut view, "/json").unwrap();

        let dumped = &output(&view)[before..];
        let parsed: serde_json::Value = serde_json::from_str(dumped).unwrap();
        assert_eq!(parsed[0]["text"], WELCOME_TEXT);
        assert_eq!(parsed[1]["text"], "Bạn: a");
        assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_exit_stops_without_sending() {
        let mut view = open_view();
        assert_eq!(handle_line(&mut view, "quit").unwrap(), LineOutcome::Exit);
        assert_eq!(view.screen().log().len(), 1);
    }

    #[test]
    fn test_help_does_not_touch_log() {
        let mut view = open_view();
        handle_line(&mut view, "/help").unwrap();
        assert!(output(&view).contains("/json"));
        assert_eq!(view.screen().log().len(), 1);
    }
}
