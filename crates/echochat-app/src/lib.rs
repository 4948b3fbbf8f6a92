//! echochat terminal application
//!
//! CLI parsing, configuration, logging and the terminal front end for the
//! chat screen.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod render;

// Re-exports from local modules
pub use app::run_repl_mode;
pub use cli::Cli;
pub use config::{AppConfig, ColorChoice, ConfigError};
pub use logging::init_logging;
pub use render::TerminalSink;
