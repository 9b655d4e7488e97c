use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use termenu::cli::{Cli, Command};
use termenu::commands;
use termenu::config::MenuConfig;
use termenu::defaults::Defaults;
use termenu::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or(Command::Run);

    // the TUI owns the terminal, so it always logs to a file
    let target = match (&cmd, cli.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Command::Run, None) => LogTarget::File(PathBuf::from(Defaults::LOG_FILE)),
        (_, None) => LogTarget::Stderr,
    };
    logging::init(target)?;

    let cfg = MenuConfig::load_or_default(cli.config.as_deref()).context("loading menu config")?;

    match cmd {
        Command::Run => termenu::app::run_menu(cfg).await,

        Command::Dump { width, height, open, json } => {
            let dump = commands::dump::render(&cfg, width, height, open.as_deref())?;
            commands::dump::emit(&dump, json)
        }

        Command::CheckConfig => {
            for line in commands::check_config::summarize(&cfg)? {
                println!("{line}");
            }
            println!("✓ config OK");
            Ok(())
        }
    }
}
