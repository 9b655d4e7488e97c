use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::defaults::Defaults;

pub enum LogTarget {
    /// Append to a file; used while the TUI owns the terminal.
    File(PathBuf),
    Stderr,
}

/// Install the global subscriber. Level comes from `TERMENU_LOG`
/// (EnvFilter syntax), defaulting to `info`.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_env(Defaults::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(Defaults::LOG_LEVEL));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!(e)).context("installing tracing subscriber")
}
