use clap::Parser;
use clap_complete::Shell;

use crate::config::ColorChoice;
use echochat_chat::ResponderKind;

/// CLI arguments for echochat
#[derive(Parser, Debug)]
#[command(name = "echochat")]
#[command(about = "Echo chat - a single chat screen in your terminal")]
#[command(version)]
pub struct Cli {
    /// When to paint entries with their background color (auto, always, never).
    /// Can also be set via ECHOCHAT_COLOR env var
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Reply strategy (echo, pending-model).
    /// Can also be set via ECHOCHAT_RESPONDER env var
    #[arg(long, value_name = "RESPONDER")]
    pub responder: Option<ResponderKind>,

    /// Enable verbose debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
