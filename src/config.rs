//! Menu definitions and colours, built in or loaded from TOML.
//!
//! ```toml
//! [theme]
//! fg = "white"
//! bg = "blue"
//!
//! [[menu]]
//! name = "File"
//! action = "file"
//! hotkey = "i"
//!
//! [[menu.items]]
//! text = "Save"
//! action = "Save"
//! hotkey = "S"
//!
//! [[menu.items]]
//! separator = true
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::defaults::Defaults;
use crate::error::ConfigError;
use crate::menu::{DropdownEntry, MenuBar, MenuEntry};
use crate::ui::style::Theme;

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub fg: Option<String>,
    pub bg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub action: String,
    pub hotkey: Option<String>,
    #[serde(default = "yes")]
    pub enabled: bool,
    #[serde(default)]
    pub separator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSpec {
    pub name: String,
    pub action: String,
    pub hotkey: Option<String>,
    #[serde(default = "yes")]
    pub enabled: bool,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Empty means "use the built-in menus".
    #[serde(default, rename = "menu")]
    pub menus: Vec<MenuSpec>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { theme: ThemeConfig::default(), menus: builtin_menus() }
    }
}

impl MenuConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut cfg: MenuConfig = toml::from_str(text)?;
        if cfg.menus.is_empty() {
            cfg.menus = builtin_menus();
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "loaded menu config");
        Self::from_toml_str(&text)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            fg: parse_color(self.theme.fg.as_deref())?,
            bg: parse_color(self.theme.bg.as_deref())?,
        })
    }

    /// Validated menus in display order.
    pub fn menus(&self) -> Result<Vec<(MenuEntry, Vec<DropdownEntry>)>, ConfigError> {
        let mut actions = HashSet::new();
        let mut out = Vec::with_capacity(self.menus.len());

        for spec in &self.menus {
            let owner = format!("menu {:?}", spec.name);
            require(&owner, "name", &spec.name)?;
            require(&owner, "action", &spec.action)?;
            if !actions.insert(spec.action.as_str()) {
                return Err(ConfigError::DuplicateAction(spec.action.clone()));
            }

            let entry = MenuEntry {
                name: spec.name.clone(),
                action: spec.action.clone(),
                hotkey: parse_hotkey(&owner, spec.hotkey.as_deref())?,
                enabled: spec.enabled,
            };

            let mut items = Vec::with_capacity(spec.items.len());
            for item in &spec.items {
                items.push(item_entry(&spec.name, item)?);
            }
            warn_duplicate_hotkeys(&owner, items.iter().filter(|i| i.is_selectable()).filter_map(|i| i.hotkey));

            out.push((entry, items));
        }

        warn_duplicate_hotkeys(
            "menu bar",
            out.iter().map(|(e, _)| e).filter(|e| e.enabled).filter_map(|e| e.hotkey),
        );
        Ok(out)
    }

    pub fn menu_bar(&self, width: u16) -> Result<MenuBar, ConfigError> {
        Ok(MenuBar::new(Defaults::BAR_ROW, width, Defaults::BAR_HEIGHT, self.menus()?))
    }
}

fn item_entry(menu: &str, item: &ItemSpec) -> Result<DropdownEntry, ConfigError> {
    if item.separator {
        return Ok(DropdownEntry::separator());
    }
    let owner = format!("item {:?} in menu {menu:?}", item.text);
    require(&owner, "text", &item.text)?;
    require(&owner, "action", &item.action)?;
    Ok(DropdownEntry {
        text: item.text.clone(),
        action: item.action.clone(),
        hotkey: parse_hotkey(&owner, item.hotkey.as_deref())?,
        enabled: item.enabled,
        separator: false,
    })
}

fn require(owner: &str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField { owner: owner.to_string(), field });
    }
    Ok(())
}

fn parse_hotkey(owner: &str, value: Option<&str>) -> Result<Option<char>, ConfigError> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ConfigError::Hotkey { owner: owner.to_string(), value: value.to_string() }),
    }
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|v| Color::from_str(v).map_err(|_| ConfigError::Color(v.to_string())))
        .transpose()
}

fn warn_duplicate_hotkeys(owner: &str, keys: impl Iterator<Item = char>) {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            warn!(%owner, hotkey = %key, "hotkey used more than once; the first entry wins");
        }
    }
}

fn menu(name: &str, action: &str, hotkey: char, items: Vec<ItemSpec>) -> MenuSpec {
    MenuSpec {
        name: name.into(),
        action: action.into(),
        hotkey: Some(hotkey.to_string()),
        enabled: true,
        items,
    }
}

fn item(text: &str, action: &str, hotkey: char) -> ItemSpec {
    ItemSpec {
        text: text.into(),
        action: action.into(),
        hotkey: Some(hotkey.to_string()),
        enabled: true,
        separator: false,
    }
}

fn separator() -> ItemSpec {
    ItemSpec {
        text: String::new(),
        action: String::new(),
        hotkey: None,
        enabled: true,
        separator: true,
    }
}

/// Standard editor menus.
pub fn builtin_menus() -> Vec<MenuSpec> {
    vec![
        menu("File", "file", 'i', vec![
            item("New", "NewTab", 'N'),
            item("Open", "Open", 'O'),
            separator(),
            item("Save", "Save", 'S'),
            item("Save As", "SaveAs", 'A'),
            separator(),
            item("Quit", "Quit", 'Q'),
        ]),
        menu("Edit", "edit", 'd', vec![
            item("Undo", "Undo", 'U'),
            item("Redo", "Redo", 'R'),
            separator(),
            item("Cut", "Cut", 'X'),
            item("Copy", "Copy", 'C'),
            item("Paste", "Paste", 'V'),
        ]),
        menu("View", "view", 'w', vec![
            item("Split Horizontal", "HSplit", 'H'),
            item("Split Vertical", "VSplit", 'V'),
            separator(),
            item("Toggle Line Numbers", "ToggleRuler", 'L'),
        ]),
        menu("Search", "search", 's', vec![
            item("Find", "Find", 'F'),
            item("Find Next", "FindNext", 'N'),
            item("Find Previous", "FindPrevious", 'P'),
            separator(),
            item("Replace", "Replace", 'R'),
        ]),
        menu("Tools", "tools", 't', vec![
            item("Command Palette", "CommandMode", 'C'),
            item("Plugin Manager", "PluginInstall", 'P'),
        ]),
        menu("Help", "help", 'h', vec![
            item("Help", "ToggleHelp", 'H'),
            item("Key Bindings", "ShowKey", 'K'),
            separator(),
            item("About", "ShowAbout", 'A'),
        ]),
    ]
}
