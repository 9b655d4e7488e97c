use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    widgets::Clear,
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::defaults::Defaults;
use crate::screens::{ConfirmQuitScreen, EditorScreen};

pub enum Transition {
    Stay,
    Push(Box<dyn ScreenWidget>),
    Pop,
    Quit,
}

#[derive(Default)]
pub struct AppCtx {
    /// Actions dispatched from the menus, oldest first.
    pub actions: Vec<String>,
}

impl AppCtx {
    pub fn record(&mut self, action: &str) {
        self.actions.push(action.to_string());
        if self.actions.len() > Defaults::ACTION_LOG_LIMIT {
            let excess = self.actions.len() - Defaults::ACTION_LOG_LIMIT;
            self.actions.drain(..excess);
        }
    }
}

#[async_trait]
pub trait ScreenWidget: Send {
    fn title(&self) -> &str { "termenu" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);

    async fn on_key(&mut self, key: KeyEvent, ctx: &mut AppCtx) -> Result<Transition>;

    /// Left-button press at a screen cell.
    async fn on_mouse(&mut self, _x: u16, _y: u16, _ctx: &mut AppCtx) -> Result<Transition> {
        Ok(Transition::Stay)
    }

    /// Every screen on the stack hears about terminal resizes.
    fn on_resize(&mut self, _width: u16, _height: u16) {}
}

pub async fn run_menu(cfg: MenuConfig) -> Result<()> {
    // terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, cfg).await;

    // restore
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, cfg: MenuConfig) -> Result<()> {
    let width = terminal.size()?.width;
    let bar = cfg.menu_bar(width).context("building menu bar")?;
    let theme = cfg.theme().context("reading theme")?;
    info!(menus = bar.entries().len(), width, "menu bar ready");

    let mut ctx = AppCtx::default();
    let mut stack: Vec<Box<dyn ScreenWidget>> = vec![Box::new(EditorScreen::new(bar, theme))];

    loop {
        terminal.draw(|f| {
            let size = f.size();
            // dialogs draw over the screens below them
            if stack.is_empty() {
                f.render_widget(Clear, size);
            }
            for screen in &stack {
                screen.draw(f, size, &ctx);
            }
        })?;

        if !event::poll(Duration::from_millis(Defaults::POLL_INTERVAL_MS))? {
            continue;
        }

        let transition = match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press => {
                // GLOBAL HOTKEY: Ctrl+Q shows confirm quit from anywhere
                if k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q')) {
                    Transition::Push(Box::new(ConfirmQuitScreen::new()))
                } else if let Some(top) = stack.last_mut() {
                    top.on_key(k, &mut ctx).await?
                } else {
                    Transition::Quit
                }
            }
            Event::Mouse(m) if matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) => {
                match stack.last_mut() {
                    Some(top) => top.on_mouse(m.column, m.row, &mut ctx).await?,
                    None => Transition::Stay,
                }
            }
            Event::Resize(w, h) => {
                debug!(w, h, "terminal resized");
                for screen in stack.iter_mut() {
                    screen.on_resize(w, h);
                }
                Transition::Stay
            }
            _ => Transition::Stay,
        };

        match transition {
            Transition::Stay => {}
            Transition::Push(s) => stack.push(s),
            Transition::Pop => {
                stack.pop();
                if stack.is_empty() {
                    break;
                }
            }
            Transition::Quit => break,
        }
    }

    info!(dispatched = ctx.actions.len(), "leaving");
    Ok(())
}
