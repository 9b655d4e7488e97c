//! Menu bar and dropdown menus for terminal text editors.
//!
//! [`menu`] holds the state machines, [`ui`] paints them into a ratatui
//! buffer, and the remaining modules make up the `termenu` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod menu;
pub mod screens;
pub mod ui;

pub use config::MenuConfig;
pub use error::ConfigError;
pub use menu::{DropdownEntry, DropdownPanel, MenuBar, MenuEntry, NavKey};
