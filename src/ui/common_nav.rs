use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Transition;
use crate::menu::NavKey;

/// Return `Transition::Pop` on Esc so every dialog gets "Back" for free.
pub fn esc_to_back(k: KeyEvent) -> Option<Transition> {
    if matches!(k.code, KeyCode::Esc) {
        Some(Transition::Pop)
    } else {
        None
    }
}

/// Map a terminal key press onto menu navigation.
pub fn nav_key(k: KeyEvent) -> NavKey {
    match k.code {
        KeyCode::Enter => NavKey::Confirm,
        KeyCode::Esc => NavKey::Cancel,
        KeyCode::Up => NavKey::Up,
        KeyCode::Down => NavKey::Down,
        KeyCode::Left => NavKey::Left,
        KeyCode::Right => NavKey::Right,
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => NavKey::Char(c),
        _ => NavKey::Other,
    }
}

/// Alt+letter, the menu bar's accelerator chord.
pub fn alt_char(k: KeyEvent) -> Option<char> {
    match k.code {
        KeyCode::Char(c) if k.modifiers.contains(KeyModifiers::ALT) => Some(c),
        _ => None,
    }
}
