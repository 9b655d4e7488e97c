use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    prelude::Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::info;

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::menu::{DropdownEntry, MenuBar, NavKey};
use crate::screens::{ConfirmQuitScreen, MessageScreen};
use crate::ui::common_nav::{alt_char, nav_key};
use crate::ui::help::help_editor;
use crate::ui::layout::editor_layout;
use crate::ui::{MenuBarWidget, Theme};

/// Main screen: the menu bar over a log of dispatched actions.
pub struct EditorScreen {
    bar: MenuBar,
    theme: Theme,
}

impl EditorScreen {
    pub fn new(bar: MenuBar, theme: Theme) -> Self {
        Self { bar, theme }
    }

    pub fn bar(&self) -> &MenuBar {
        &self.bar
    }

    fn open_first(&mut self) {
        if let Some(i) = self.bar.entries().iter().position(|e| e.enabled) {
            self.bar.set_active(Some(i));
            self.bar.set_open(true);
        }
    }

    /// Run the editor-side effect of a chosen menu entry.
    fn dispatch(&self, entry: &DropdownEntry, ctx: &mut AppCtx) -> Transition {
        info!(action = %entry.action, "menu action");
        match entry.action.as_str() {
            "Quit" => Transition::Push(Box::new(ConfirmQuitScreen::new())),
            "ShowAbout" => Transition::Push(Box::new(MessageScreen::about())),
            "ShowKey" => Transition::Push(Box::new(MessageScreen::key_bindings())),
            action => {
                ctx.record(action);
                Transition::Stay
            }
        }
    }

    fn body_lines(&self, ctx: &AppCtx, rows: usize) -> Vec<Line<'static>> {
        if ctx.actions.is_empty() {
            return vec![Line::styled(
                "No actions yet. Open a menu with Alt + the underlined letter, F10, or the mouse.",
                Style::default().fg(Color::DarkGray),
            )];
        }
        let skip = ctx.actions.len().saturating_sub(rows);
        ctx.actions
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, a)| Line::from(format!("{:>4}  {a}", i + 1)))
            .collect()
    }
}

#[async_trait]
impl ScreenWidget for EditorScreen {
    fn title(&self) -> &str { "Actions" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let layout = editor_layout(size, 3);

        let rows = layout.body.height.saturating_sub(2) as usize;
        let body = Paragraph::new(self.body_lines(ctx, rows))
            .block(Block::default().borders(Borders::ALL).title(self.title()));
        f.render_widget(body, layout.body);
        f.render_widget(help_editor(self.bar.is_open()), layout.footer);

        // last, so the dropdown sits on top of the body
        f.render_widget(MenuBarWidget::new(&self.bar, &self.theme), size);
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if let Some(c) = alt_char(k) {
            self.bar.handle_key(c);
            return Ok(Transition::Stay);
        }
        if k.code == KeyCode::F(10) {
            if self.bar.is_open() {
                self.bar.handle_key_navigation(NavKey::Cancel);
            } else {
                self.open_first();
            }
            return Ok(Transition::Stay);
        }
        if !self.bar.is_open() {
            return Ok(Transition::Stay);
        }
        Ok(match self.bar.handle_key_navigation(nav_key(k)) {
            Some(entry) => self.dispatch(&entry, ctx),
            None => Transition::Stay,
        })
    }

    async fn on_mouse(&mut self, x: u16, y: u16, ctx: &mut AppCtx) -> Result<Transition> {
        Ok(match self.bar.handle_click(x, y) {
            Some(entry) => self.dispatch(&entry, ctx),
            None => Transition::Stay,
        })
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.bar.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen() -> EditorScreen {
        let cfg = MenuConfig::default();
        EditorScreen::new(cfg.menu_bar(60).expect("bar"), Theme::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn alt_hotkey_then_enter_dispatches() {
        let mut s = screen();
        let mut ctx = AppCtx::default();
        s.on_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT), &mut ctx).await.expect("key");
        assert_eq!(s.bar().menu_action(), "edit");
        s.on_key(key(KeyCode::Down), &mut ctx).await.expect("key");
        let t = s.on_key(key(KeyCode::Enter), &mut ctx).await.expect("key");
        assert!(matches!(t, Transition::Stay));
        assert_eq!(ctx.actions, ["Redo"]);
        assert!(!s.bar().is_open());
    }

    #[tokio::test]
    async fn plain_keys_ignored_while_closed() {
        let mut s = screen();
        let mut ctx = AppCtx::default();
        s.on_key(key(KeyCode::Char('i')), &mut ctx).await.expect("key");
        assert!(!s.bar().is_open());
    }

    #[tokio::test]
    async fn f10_toggles_first_menu() {
        let mut s = screen();
        let mut ctx = AppCtx::default();
        s.on_key(key(KeyCode::F(10)), &mut ctx).await.expect("key");
        assert_eq!(s.bar().menu_action(), "file");
        s.on_key(key(KeyCode::F(10)), &mut ctx).await.expect("key");
        assert!(!s.bar().is_open());
    }

    #[tokio::test]
    async fn quit_entry_asks_for_confirmation() {
        let mut s = screen();
        let mut ctx = AppCtx::default();
        s.on_key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::ALT), &mut ctx).await.expect("key");
        let t = s.on_key(key(KeyCode::Char('Q')), &mut ctx).await.expect("key");
        assert!(matches!(t, Transition::Push(_)));
        assert!(ctx.actions.is_empty());
    }

    #[tokio::test]
    async fn mouse_opens_and_picks() {
        let mut s = screen();
        let mut ctx = AppCtx::default();
        // "Search" starts after " File  Edit  View "
        s.on_mouse(19, 0, &mut ctx).await.expect("click");
        assert_eq!(s.bar().menu_action(), "search");
        let t = s.on_mouse(20, 3, &mut ctx).await.expect("click");
        assert!(matches!(t, Transition::Stay));
        assert_eq!(ctx.actions, ["FindNext"]);
    }

    #[test]
    fn draws_bar_and_open_dropdown() {
        let mut s = screen();
        s.bar.handle_key('i');
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("terminal");
        let ctx = AppCtx::default();
        terminal.draw(|f| s.draw(f, f.size(), &ctx)).expect("draw");
        let buf = terminal.backend().buffer();
        let top: String = (0..40).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert!(top.starts_with(" File  Edit  View  Search  Tools  Help "));
        assert_eq!(buf.get(0, 1).symbol(), "┌");
        assert_eq!(buf.get(2, 2).symbol(), "N");
    }
}
