use std::collections::HashMap;

use tracing::{debug, warn};

use super::dropdown::DropdownPanel;
use super::entry::{DropdownEntry, MenuEntry};
use super::layout::text_width;
use super::nav::{cycle, hotkey_matches, Direction, NavKey};
use crate::ui::render::{draw_text, fill_row, put};
use crate::ui::style::StyleProvider;
use crate::ui::surface::Surface;

// one blank column either side of each name
const ENTRY_PADDING: u16 = 2;

/// Columns an entry takes on the bar, padding included.
fn padded_width(name: &str) -> u16 {
    u16::try_from(text_width(name)).unwrap_or(u16::MAX).saturating_add(ENTRY_PADDING)
}

/// Column span of one top-level entry as laid out on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySpan {
    pub index: usize,
    pub start: u16,
    pub end: u16,
}

/// Horizontal menu bar owning one dropdown per top-level entry.
///
/// When `open`, `active` is a valid index and its dropdown is the only
/// visible one.
#[derive(Debug, Clone)]
pub struct MenuBar {
    entries: Vec<MenuEntry>,
    dropdowns: HashMap<String, DropdownPanel>,
    active: Option<usize>,
    open: bool,
    y: u16,
    width: u16,
    height: u16,
}

impl MenuBar {
    /// Build the bar on row `y`. Each entry brings the items of its
    /// dropdown; if two entries share an action id the first keeps it.
    pub fn new<I>(y: u16, width: u16, height: u16, menus: I) -> Self
    where
        I: IntoIterator<Item = (MenuEntry, Vec<DropdownEntry>)>,
    {
        let mut entries = Vec::new();
        let mut dropdowns = HashMap::new();
        for (entry, items) in menus {
            if dropdowns.contains_key(&entry.action) {
                warn!(action = %entry.action, "duplicate menu action, keeping the first dropdown");
            } else {
                dropdowns.insert(entry.action.clone(), DropdownPanel::new(items));
            }
            entries.push(entry);
        }
        Self { entries, dropdowns, active: None, open: false, y, width, height }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn dropdown(&self, action: &str) -> Option<&DropdownPanel> {
        self.dropdowns.get(action)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn row(&self) -> u16 {
        self.y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Only the width follows the terminal; the bar stays one row tall.
    pub fn resize(&mut self, width: u16, _height: u16) {
        self.width = width;
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.entries.len());
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        // hide everything first so at most one panel is ever visible
        for panel in self.dropdowns.values_mut() {
            panel.hide();
        }
        if !open {
            return;
        }
        let Some(index) = self.active else {
            self.open = false;
            return;
        };
        let x = self.entry_column(index);
        let y = self.y.saturating_add(1);
        let action = &self.entries[index].action;
        if let Some(panel) = self.dropdowns.get_mut(action) {
            debug!(%action, x, y, "opening menu");
            panel.show(x, y);
        }
    }

    fn close(&mut self) {
        if self.open {
            debug!("closing menu");
        }
        self.set_active(None);
        self.set_open(false);
    }

    fn open_at(&mut self, index: usize) {
        self.set_active(Some(index));
        self.set_open(true);
    }

    /// Screen column of entry `index`: the padded widths of the enabled
    /// entries before it.
    pub fn entry_column(&self, index: usize) -> u16 {
        self.entries
            .iter()
            .take(index)
            .filter(|e| e.enabled)
            .map(|e| padded_width(&e.name))
            .fold(0u16, u16::saturating_add)
    }

    /// Spans of the enabled entries that fit within the bar width.
    pub fn spans(&self) -> Vec<EntrySpan> {
        let mut spans = Vec::new();
        let mut x: u16 = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.enabled {
                continue;
            }
            let end = x.saturating_add(padded_width(&entry.name));
            if end > self.width {
                break;
            }
            spans.push(EntrySpan { index, start: x, end });
            x = end;
        }
        spans
    }

    pub fn render<S, P>(&self, surface: &mut S, styles: &P)
    where
        S: Surface + ?Sized,
        P: StyleProvider + ?Sized,
    {
        if self.height == 0 || self.width == 0 {
            return;
        }
        let base = styles.base();
        let y = self.y;
        fill_row(surface, 0, self.width, y, ' ', base);

        let mut x = 0;
        for span in self.spans() {
            let entry = &self.entries[span.index];
            let style = if self.active == Some(span.index) { styles.reversed(base) } else { base };

            put(surface, span.start, y, ' ', style);
            let text_start = span.start.saturating_add(1);
            let text_end = draw_text(surface, text_start, y, span.end.saturating_sub(1), &entry.name, |c| {
                if hotkey_matches(c, entry.hotkey) {
                    styles.underlined(style)
                } else {
                    style
                }
            });
            put(surface, text_end, y, ' ', style);
            x = span.end;
        }
        fill_row(surface, x, self.width, y, ' ', base);
    }

    fn open_panel_mut(&mut self) -> Option<&mut DropdownPanel> {
        if !self.open {
            return None;
        }
        let action = &self.entries.get(self.active?)?.action;
        self.dropdowns.get_mut(action)
    }

    /// Mouse click at screen cell (`x`, `y`). Returns the dropdown entry
    /// the click picked, if any.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Option<DropdownEntry> {
        let open_before = if self.open { self.active } else { None };

        if let Some(panel) = self.open_panel_mut().filter(|p| p.is_visible()) {
            if let Some(entry) = panel.handle_click(x, y) {
                self.close();
                return Some(entry);
            }
            if panel.is_visible() {
                // border, separator or disabled row inside the panel
                return None;
            }
            self.close();
        }

        if y != self.y {
            if self.open {
                self.close();
            }
            return None;
        }

        let hit = self.spans().into_iter().find(|s| x >= s.start && x < s.end);
        match hit {
            Some(span) if open_before == Some(span.index) => self.close(),
            Some(span) => self.open_at(span.index),
            None => self.close(),
        }
        None
    }

    /// Top-level hotkey: opens the matching enabled entry.
    pub fn handle_key(&mut self, key: char) -> bool {
        let hit = self
            .entries
            .iter()
            .position(|e| e.enabled && hotkey_matches(key, e.hotkey));
        match hit {
            Some(index) => {
                self.open_at(index);
                true
            }
            None => false,
        }
    }

    /// Keyboard routing: opens menus by hotkey while closed and drives the
    /// open dropdown otherwise. Returns the entry chosen, if any.
    pub fn handle_key_navigation(&mut self, key: NavKey) -> Option<DropdownEntry> {
        if !self.open || self.active.is_none() {
            if let NavKey::Char(c) = key {
                self.handle_key(c);
            }
            return None;
        }

        let panel = self.open_panel_mut().filter(|p| p.is_visible())?;
        match key {
            NavKey::Confirm => {
                let picked = panel.select_active();
                if picked.is_some() {
                    self.close();
                }
                picked
            }
            NavKey::Cancel => {
                self.close();
                None
            }
            NavKey::Up => {
                panel.navigate_up();
                None
            }
            NavKey::Down => {
                panel.navigate_down();
                None
            }
            NavKey::Left => {
                self.step_menu(Direction::Backward);
                None
            }
            NavKey::Right => {
                self.step_menu(Direction::Forward);
                None
            }
            NavKey::Char(c) => {
                let picked = panel.handle_key(c);
                if picked.is_some() {
                    self.close();
                }
                picked
            }
            NavKey::Other => None,
        }
    }

    fn step_menu(&mut self, dir: Direction) {
        let next = cycle(self.entries.len(), self.active, dir, |i| self.entries[i].enabled);
        if let Some(index) = next {
            self.open_at(index);
        }
    }

    /// Action id of the active top-level entry, or "" when none.
    pub fn menu_action(&self) -> &str {
        self.active
            .and_then(|i| self.entries.get(i))
            .map_or("", |e| e.action.as_str())
    }

    pub fn active_dropdown(&self) -> Option<&DropdownPanel> {
        if !self.open {
            return None;
        }
        let entry = self.entries.get(self.active?)?;
        self.dropdowns.get(&entry.action)
    }

    fn visible_count(&self) -> usize {
        self.dropdowns.values().filter(|p| p.is_visible()).count()
    }

    /// True when the open flag, active index and panel visibility agree.
    pub fn is_consistent(&self) -> bool {
        if self.open {
            self.active.is_some_and(|i| i < self.entries.len())
                && self.active_dropdown().map_or(self.visible_count() == 0, |p| {
                    p.is_visible() && self.visible_count() == 1
                })
        } else {
            self.visible_count() == 0
        }
    }
}
