use ratatui::layout::Rect;
use tracing::debug;

use super::entry::DropdownEntry;
use super::layout::{compute_size, Size};
use super::nav::{cycle, hotkey_matches, Direction};
use crate::ui::render::{draw_frame, draw_shadow, draw_text, fill_row};
use crate::ui::style::StyleProvider;
use crate::ui::surface::Surface;

/// A popup list anchored below a menu bar entry.
///
/// While visible, `highlighted` always points at a selectable entry when
/// one exists.
#[derive(Debug, Clone, Default)]
pub struct DropdownPanel {
    entries: Vec<DropdownEntry>,
    x: u16,
    y: u16,
    size: Size,
    highlighted: Option<usize>,
    visible: bool,
}

impl DropdownPanel {
    pub fn new(entries: Vec<DropdownEntry>) -> Self {
        let mut panel = Self::default();
        panel.set_items(entries);
        panel
    }

    pub fn set_items(&mut self, entries: Vec<DropdownEntry>) {
        self.size = compute_size(&entries);
        self.entries = entries;
        if self.highlighted.is_some_and(|i| !self.selectable(i)) {
            self.highlighted = self.first_selectable();
        }
    }

    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn anchor(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn selectable(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(DropdownEntry::is_selectable)
    }

    fn first_selectable(&self) -> Option<usize> {
        self.entries.iter().position(DropdownEntry::is_selectable)
    }

    pub fn show(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
        self.visible = true;
        self.highlighted = self.first_selectable();
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    /// Panel rectangle at the stored anchor, before any on-screen clamping.
    pub fn rect(&self) -> Rect {
        let Size { width, height } = self.size;
        Rect { x: self.x, y: self.y, width, height }
    }

    /// Where the panel is painted on a `term_w` x `term_h` screen: shifted
    /// left/up just enough to fit, never past column or row 0.
    pub fn placed_rect(&self, term_w: u16, term_h: u16) -> Rect {
        let Size { width, height } = self.size;
        let mut x = self.x;
        let mut y = self.y;
        if x.saturating_add(width) > term_w {
            x = term_w.saturating_sub(width);
        }
        if y.saturating_add(height) > term_h {
            y = term_h.saturating_sub(height);
        }
        Rect { x, y, width, height }
    }

    pub fn render<S, P>(&self, surface: &mut S, styles: &P)
    where
        S: Surface + ?Sized,
        P: StyleProvider + ?Sized,
    {
        if !self.visible || self.size.height == 0 || self.size.width == 0 {
            return;
        }
        let (term_w, term_h) = surface.size();
        if term_w == 0 || term_h == 0 {
            return;
        }

        let rect = self.placed_rect(term_w, term_h);
        let base = styles.base();

        draw_shadow(surface, rect, styles.dimmed(base));
        draw_frame(surface, rect, base, base);

        let inner_left = rect.x.saturating_add(1);
        let inner_right = rect.right().saturating_sub(1);
        let text_limit = rect.right().saturating_sub(2);

        let rows = rect.height.saturating_sub(2) as usize;
        for (i, entry) in self.entries.iter().take(rows).enumerate() {
            let y = rect.y.saturating_add(1 + i as u16);
            if y >= term_h {
                break;
            }

            if entry.separator {
                fill_row(surface, inner_left, inner_right, y, '─', base);
                continue;
            }

            let mut style = base;
            if self.highlighted == Some(i) {
                style = styles.reversed(style);
            }
            if !entry.enabled {
                style = styles.dimmed(style);
            }

            fill_row(surface, inner_left, inner_right, y, ' ', style);
            let x = draw_text(surface, rect.x.saturating_add(2), y, text_limit, &entry.text, |_| style);

            if let Some(key) = entry.hotkey {
                if x < rect.right().saturating_sub(4) {
                    let hint = format!(" ({key})");
                    draw_text(surface, x, y, text_limit, &hint, |_| styles.dimmed(style));
                }
            }
        }
    }

    /// Mouse click at screen cell (`x`, `y`). A click outside the panel
    /// dismisses it; a click on a selectable row picks it.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Option<DropdownEntry> {
        if !self.visible {
            return None;
        }

        let rect = self.rect();
        if x < rect.x || x >= rect.right() || y < rect.y || y >= rect.bottom() {
            debug!(x, y, "click outside dropdown, hiding");
            self.hide();
            return None;
        }

        if x == rect.x || x == rect.right() - 1 || y == rect.y || y == rect.bottom() - 1 {
            return None;
        }

        let index = (y - rect.y - 1) as usize;
        self.take_if_selectable(index)
    }

    /// Hotkey activation while the panel is visible.
    pub fn handle_key(&mut self, key: char) -> Option<DropdownEntry> {
        if !self.visible {
            return None;
        }
        let index = self.hotkey_index(key)?;
        self.take_if_selectable(index)
    }

    /// Index of the first selectable entry whose hotkey matches `key`.
    pub fn hotkey_index(&self, key: char) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.is_selectable() && hotkey_matches(key, e.hotkey))
    }

    pub fn navigate_up(&mut self) {
        self.step(Direction::Backward);
    }

    pub fn navigate_down(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn move_up(&mut self) {
        self.navigate_up();
    }

    pub fn move_down(&mut self) {
        self.navigate_down();
    }

    fn step(&mut self, dir: Direction) {
        if !self.visible {
            return;
        }
        if let Some(next) = cycle(self.entries.len(), self.highlighted, dir, |i| self.selectable(i)) {
            self.highlighted = Some(next);
        }
    }

    pub fn select_active(&mut self) -> Option<DropdownEntry> {
        if !self.visible {
            return None;
        }
        self.take_if_selectable(self.highlighted?)
    }

    pub fn active_item(&self) -> Option<&DropdownEntry> {
        self.entries.get(self.highlighted?)
    }

    fn take_if_selectable(&mut self, index: usize) -> Option<DropdownEntry> {
        if !self.selectable(index) {
            return None;
        }
        let entry = self.entries[index].clone();
        debug!(action = %entry.action, "dropdown entry selected");
        self.hide();
        Some(entry)
    }
}
