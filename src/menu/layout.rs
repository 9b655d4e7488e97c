use unicode_width::UnicodeWidthChar;

use super::entry::DropdownEntry;

/// Tab stop used when measuring menu text.
pub const TAB_WIDTH: usize = 1;

pub const MIN_DROPDOWN_WIDTH: u16 = 8;

// 2 border columns + 2 padding columns
const FRAME_PADDING: usize = 4;
// " (X)"
const HOTKEY_HINT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Display width of a single character; control and combining characters
/// take no column.
pub fn char_width(c: char, tab_width: usize) -> usize {
    if c == '\t' {
        tab_width
    } else {
        c.width().unwrap_or(0)
    }
}

pub fn string_width(text: &str, tab_width: usize) -> usize {
    text.chars().map(|c| char_width(c, tab_width)).sum()
}

pub fn text_width(text: &str) -> usize {
    string_width(text, TAB_WIDTH)
}

pub fn compute_size(entries: &[DropdownEntry]) -> Size {
    let widest = entries
        .iter()
        .filter(|e| !e.separator)
        .map(|e| text_width(&e.text) + if e.hotkey.is_some() { HOTKEY_HINT_WIDTH } else { 0 })
        .max()
        .unwrap_or(0);

    let width = (widest + FRAME_PADDING).min(u16::MAX as usize) as u16;
    let height = (entries.len() + 2).min(u16::MAX as usize) as u16;
    Size { width: width.max(MIN_DROPDOWN_WIDTH), height }
}
