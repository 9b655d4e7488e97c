use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Terminal menu bar with dropdown menus
#[derive(Parser, Debug)]
#[command(version, about = "Terminal menu bar with dropdown menus")]
pub struct Cli {
    /// Menu definitions (TOML); the built-in editor menus are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where to write logs (default: ./termenu.log for `run`, stderr otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive menu demo (default)
    Run,

    /// Render the menus off-screen and print them
    Dump {
        /// Screen width in cells
        #[arg(long, default_value_t = Defaults::DUMP_WIDTH)]
        width: u16,

        /// Screen height in cells
        #[arg(long, default_value_t = Defaults::DUMP_HEIGHT)]
        height: u16,

        /// Action id of the menu to open before rendering (e.g. "file")
        #[arg(long)]
        open: Option<String>,

        /// Print the layout as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a menu config and summarise its menus
    CheckConfig,
}
