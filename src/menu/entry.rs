use serde::Serialize;

/// A top-level entry of the menu bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: String,
    pub action: String,
    pub hotkey: Option<char>,
    pub enabled: bool,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, action: impl Into<String>, hotkey: char) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            hotkey: Some(hotkey),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One row of a dropdown: either a selectable item or a separator rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DropdownEntry {
    pub text: String,
    pub action: String,
    pub hotkey: Option<char>,
    pub enabled: bool,
    pub separator: bool,
}

impl DropdownEntry {
    pub fn item(text: impl Into<String>, action: impl Into<String>, hotkey: Option<char>) -> Self {
        Self {
            text: text.into(),
            action: action.into(),
            hotkey,
            enabled: true,
            separator: false,
        }
    }

    pub fn separator() -> Self {
        Self { separator: true, ..Self::default() }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Only enabled, non-separator rows can be highlighted or chosen.
    pub fn is_selectable(&self) -> bool {
        self.enabled && !self.separator
    }
}
