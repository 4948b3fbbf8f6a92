pub mod repl;

pub use repl::{handle_line, run_repl_mode, LineOutcome, ReplCommand};
