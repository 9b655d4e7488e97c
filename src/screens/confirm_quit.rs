use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::layout::centered_rect_abs;
use crate::ui::style;

const MESSAGE: &str = "Quit the editor? Unsaved changes will be lost.";
const STAY_LABEL: &str = "Don't Quit";
const QUIT_LABEL: &str = "Quit";

pub struct ConfirmQuitScreen {
    selected: usize, // 0 = Don't Quit, 1 = Quit
}

impl ConfirmQuitScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for ConfirmQuitScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenWidget for ConfirmQuitScreen {
    fn title(&self) -> &str {
        "" // continuous top border
    }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        // "< " + label + " >"
        let btn_len = |label: &str| 4 + label.len();
        let buttons_len = btn_len(STAY_LABEL) + 3 + btn_len(QUIT_LABEL);

        let inner_width = (MESSAGE.len().max(buttons_len) as u16).max(36);
        let inner_height = 4;

        let area = centered_rect_abs(inner_width + 4, inner_height + 3, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let msg_line = Paragraph::new(Line::from(vec![Span::raw(MESSAGE)])).alignment(Alignment::Center);

        let mut btn_spans = Vec::new();
        btn_spans.extend(style::button_spans(STAY_LABEL, self.selected == 0));
        btn_spans.push(Span::raw("   "));
        btn_spans.extend(style::button_spans(QUIT_LABEL, self.selected == 1));
        let buttons_line = Paragraph::new(Line::from(btn_spans)).alignment(Alignment::Center);

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).title(self.title()), area);
        f.render_widget(msg_line, vchunks[1]);
        f.render_widget(buttons_line, vchunks[3]);
    }

    async fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Result<Transition> {
        match k.code {
            KeyCode::Esc => return Ok(Transition::Pop),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char(' ') => {
                self.selected = 1 - self.selected;
            }
            KeyCode::Char('y' | 'Y') => return Ok(Transition::Quit),
            KeyCode::Char('n' | 'N') => return Ok(Transition::Pop),
            KeyCode::Enter => {
                return Ok(if self.selected == 1 {
                    Transition::Quit
                } else {
                    Transition::Pop
                });
            }
            _ => {}
        }
        Ok(Transition::Stay)
    }
}
