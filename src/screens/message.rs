use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::common_nav::esc_to_back;
use crate::ui::layout::centered_rect;

const ABOUT: &str = "termenu: a menu bar with dropdown menus for terminal text editors. \
Menus open with Alt and the underlined letter, with F10, or with a mouse click. \
Inside a menu use the arrow keys, Enter to pick an entry, and Esc to close.";

const KEY_BINDINGS: &str = "Alt+<letter>  open the menu whose name has that letter underlined\n\
F10           open the first menu, or close the open one\n\
Up/Down       move between entries, skipping separators\n\
Left/Right    switch to the neighbouring menu\n\
Enter         run the highlighted entry\n\
<letter>      run the entry whose hotkey is shown in parentheses\n\
Esc           close the menu\n\
Ctrl+Q        quit";

/// Read-only dialog with wrapped text; Esc or Enter closes it.
pub struct MessageScreen {
    title: String,
    text: String,
}

impl MessageScreen {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into() }
    }

    pub fn about() -> Self {
        Self::new("About", ABOUT)
    }

    pub fn key_bindings() -> Self {
        Self::new("Key Bindings", KEY_BINDINGS)
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        self.text
            .lines()
            .flat_map(|para| wrap(para, width.max(1)))
            .map(|l| Line::from(l.into_owned()))
            .collect()
    }
}

#[async_trait]
impl ScreenWidget for MessageScreen {
    fn title(&self) -> &str { &self.title }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let area = centered_rect(70, 60, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });
        let block = Block::default().borders(Borders::ALL).title(self.title());
        f.render_widget(Clear, area);
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(self.lines(inner.width as usize)), inner);
    }

    async fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Result<Transition> {
        if let Some(t) = esc_to_back(k) {
            return Ok(t);
        }
        Ok(match k.code {
            KeyCode::Enter => Transition::Pop,
            _ => Transition::Stay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_to_width() {
        let s = MessageScreen::new("t", "one two three four\nfive");
        let lines = s.lines(9);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], Line::from("one two"));
        assert_eq!(lines[1], Line::from("three"));
        assert_eq!(lines[3], Line::from("five"));
    }
}
