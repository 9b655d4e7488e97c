// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use std::borrow::Cow;

/// Source of the menu styles. Modifiers return new values and never touch
/// the base style.
pub trait StyleProvider {
    fn base(&self) -> Style;

    fn reversed(&self, style: Style) -> Style {
        style.add_modifier(Modifier::REVERSED)
    }

    fn dimmed(&self, style: Style) -> Style {
        style.add_modifier(Modifier::DIM)
    }

    fn underlined(&self, style: Style) -> Style {
        style.add_modifier(Modifier::UNDERLINED)
    }
}

/// Colours for the bar and dropdowns. `None` keeps the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl StyleProvider for Theme {
    fn base(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }
}

/* ---------- help bar spans ---------- */

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

/* ---------- dialog buttons ---------- */

const ACCENT_BRACKET: Color = Color::Blue;
const SELECTED_TEXT: Color = Color::Red;
const IDLE_TEXT: Color = Color::Blue;

/// "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    vec![
        Span::styled("< ", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
        Span::styled(
            label,
            Style::default()
                .fg(if selected { SELECTED_TEXT } else { IDLE_TEXT })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
    ]
}
