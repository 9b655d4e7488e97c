use ratatui::{
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

pub fn help_editor<'a>(menu_open: bool) -> Paragraph<'a> {
    let line = if menu_open {
        Line::from(vec![
            span_key("↑/↓"), span_text(" Item"), span_sep(),
            span_key("←/→"), span_text(" Menu"), span_sep(),
            span_key("Enter"), span_text(" Select"), span_sep(),
            span_key("Esc"), span_text(" Close"),
        ])
    } else {
        Line::from(vec![
            span_key("Alt+Hotkey/F10"), span_text(" Open menu"), span_sep(),
            span_key("Mouse"), span_text(" Click menus"), span_sep(),
            span_key("Ctrl+Q"), span_text(" Quit"),
        ])
    };
    Paragraph::new(line).block(Block::default().borders(Borders::ALL)).wrap(Wrap { trim: true })
}
