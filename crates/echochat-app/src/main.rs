use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use echochat::{init_logging, run_repl_mode, AppConfig, Cli};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::from_cli(&cli).context("Invalid configuration")?;
    init_logging(config.verbose);
    log::debug!("configuration: {:?}", config);

    run_repl_mode(&config)
}
