//! Movement and hotkey rules shared by the bar and its dropdowns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Semantic key fed to [`MenuBar::handle_key_navigation`](super::MenuBar::handle_key_navigation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Confirm,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// Uppercase input also matches a lowercase hotkey; lowercase input only
/// matches exactly.
pub fn hotkey_matches(input: char, stored: Option<char>) -> bool {
    let Some(stored) = stored else {
        return false;
    };
    if input == stored {
        return true;
    }
    if !input.is_uppercase() {
        return false;
    }
    let mut folded = input.to_lowercase();
    match (folded.next(), folded.next()) {
        (Some(lower), None) => lower == stored,
        _ => false,
    }
}

/// Nearest index accepted by `selectable`, moving from `current` in `dir`
/// and wrapping around the ends. Without a current index the scan starts
/// at the first (forward) or last (backward) position.
pub fn cycle(
    len: usize,
    current: Option<usize>,
    dir: Direction,
    selectable: impl Fn(usize) -> bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current.filter(|&c| c < len) {
        None => match dir {
            Direction::Forward => (0..len).find(|&i| selectable(i)),
            Direction::Backward => (0..len).rev().find(|&i| selectable(i)),
        },
        Some(cur) => (1..=len)
            .map(|step| match dir {
                Direction::Forward => (cur + step) % len,
                Direction::Backward => (cur + len - step) % len,
            })
            .find(|&i| selectable(i)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_input_matches_lowercase_hotkey() {
        assert!(hotkey_matches('I', Some('i')));
        assert!(hotkey_matches('i', Some('i')));
        assert!(hotkey_matches('N', Some('N')));
        assert!(!hotkey_matches('n', Some('N')));
        assert!(!hotkey_matches('x', Some('i')));
        assert!(!hotkey_matches('a', None));
    }

    #[test]
    fn non_ascii_fold() {
        assert!(hotkey_matches('Ä', Some('ä')));
        assert!(!hotkey_matches('ä', Some('Ä')));
    }

    #[test]
    fn cycle_wraps_and_skips() {
        let ok = [true, false, true, true, false];
        let sel = |i: usize| ok[i];
        assert_eq!(cycle(5, Some(0), Direction::Forward, sel), Some(2));
        assert_eq!(cycle(5, Some(3), Direction::Forward, sel), Some(0));
        assert_eq!(cycle(5, Some(0), Direction::Backward, sel), Some(3));
        assert_eq!(cycle(5, None, Direction::Forward, sel), Some(0));
        assert_eq!(cycle(5, None, Direction::Backward, sel), Some(3));
    }

    #[test]
    fn cycle_single_selectable_stays_put() {
        let sel = |i: usize| i == 2;
        assert_eq!(cycle(4, Some(2), Direction::Forward, sel), Some(2));
        assert_eq!(cycle(4, Some(2), Direction::Backward, sel), Some(2));
    }

    #[test]
    fn cycle_nothing_selectable() {
        assert_eq!(cycle(3, Some(1), Direction::Forward, |_| false), None);
        assert_eq!(cycle(0, None, Direction::Backward, |_| true), None);
    }
}
