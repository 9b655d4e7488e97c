use std::path::PathBuf;

use thiserror::Error;

/// Problems loading or validating a menu configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing menu config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{owner}: hotkey {value:?} must be a single character")]
    Hotkey { owner: String, value: String },

    #[error("{owner}: `{field}` must not be empty")]
    EmptyField { owner: String, field: &'static str },

    #[error("menu action {0:?} is used by more than one menu")]
    DuplicateAction(String),

    #[error("unknown colour {0:?}")]
    Color(String),
}
