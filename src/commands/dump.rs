use anyhow::{anyhow, Context, Result};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::MenuConfig;
use crate::menu::{DropdownEntry, MenuBar};
use crate::ui::MenuBarWidget;

#[derive(Serialize)]
pub struct BarSpan {
    pub name: String,
    pub action: String,
    pub start: u16,
    pub end: u16,
    pub active: bool,
}

#[derive(Serialize)]
pub struct DropdownLayout {
    pub action: String,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub highlighted: Option<usize>,
    pub entries: Vec<DropdownEntry>,
}

/// Off-screen snapshot of the menus.
#[derive(Serialize)]
pub struct Dump {
    pub width: u16,
    pub height: u16,
    pub bar: Vec<BarSpan>,
    pub dropdown: Option<DropdownLayout>,
    #[serde(skip)]
    pub lines: Vec<String>,
}

pub fn render(cfg: &MenuConfig, width: u16, height: u16, open: Option<&str>) -> Result<Dump> {
    let mut bar = cfg.menu_bar(width).context("building menu bar")?;
    let theme = cfg.theme().context("reading theme")?;

    if let Some(action) = open {
        let index = bar
            .entries()
            .iter()
            .position(|e| e.action == action && e.enabled)
            .ok_or_else(|| anyhow!("no enabled menu with action {action:?}"))?;
        bar.set_active(Some(index));
        bar.set_open(true);
    }

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    MenuBarWidget::new(&bar, &theme).render(area, &mut buf);

    Ok(Dump {
        width,
        height,
        bar: bar_spans(&bar),
        dropdown: dropdown_layout(&bar, width, height),
        lines: buffer_lines(&buf),
    })
}

fn bar_spans(bar: &MenuBar) -> Vec<BarSpan> {
    bar.spans()
        .into_iter()
        .map(|s| {
            let e = &bar.entries()[s.index];
            BarSpan {
                name: e.name.clone(),
                action: e.action.clone(),
                start: s.start,
                end: s.end,
                active: bar.active() == Some(s.index),
            }
        })
        .collect()
}

fn dropdown_layout(bar: &MenuBar, width: u16, height: u16) -> Option<DropdownLayout> {
    let panel = bar.active_dropdown()?;
    let rect = panel.placed_rect(width, height);
    Some(DropdownLayout {
        action: bar.menu_action().to_string(),
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        highlighted: panel.highlighted(),
        entries: panel.entries().to_vec(),
    })
}

/// Buffer rows as text, skipping the cell hidden behind each wide symbol.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buf.get(x, y).symbol();
                line.push_str(symbol);
                x += (symbol.width() as u16).max(1);
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn emit(dump: &Dump, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(dump)?);
    } else {
        for line in &dump.lines {
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_with_open_menu() {
        let cfg = MenuConfig::default();
        let dump = render(&cfg, 50, 12, Some("edit")).expect("dump");
        assert_eq!(dump.lines[0], " File  Edit  View  Search  Tools  Help");
        assert!(dump.bar[1].active);
        let dd = dump.dropdown.as_ref().expect("dropdown");
        assert_eq!((dd.x, dd.y), (6, 1));
        assert_eq!(dd.highlighted, Some(0));
        assert!(dump.lines[2].contains("Undo (U)"));
    }

    #[test]
    fn dump_json_has_layout() {
        let dump = render(&MenuConfig::default(), 50, 12, None).expect("dump");
        let v = serde_json::to_value(&dump).expect("json");
        assert_eq!(v["bar"][0]["action"], "file");
        assert!(v["dropdown"].is_null());
        assert!(v.get("lines").is_none());
    }

    #[test]
    fn unknown_menu_is_an_error() {
        assert!(render(&MenuConfig::default(), 50, 12, Some("nope")).is_err());
    }

    #[test]
    fn wide_symbols_not_doubled() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.set_string(0, 0, "日x", ratatui::style::Style::default());
        assert_eq!(buffer_lines(&buf), vec!["日x".to_string()]);
    }
}
