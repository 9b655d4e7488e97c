use proptest::prelude::*;

use termenu::menu::{compute_size, DropdownEntry, DropdownPanel, MenuBar, MenuEntry, NavKey};

fn entry() -> impl Strategy<Value = DropdownEntry> {
    (
        "[a-zA-Z ]{0,14}|[日本語é]{1,4}",
        proptest::option::of(proptest::char::range('a', 'z')),
        any::<bool>(),
        prop::bool::weighted(0.2),
    )
        .prop_map(|(text, hotkey, enabled, separator)| {
            if separator {
                DropdownEntry::separator()
            } else {
                DropdownEntry { action: text.clone(), text, hotkey, enabled, separator: false }
            }
        })
}

fn entries() -> impl Strategy<Value = Vec<DropdownEntry>> {
    prop::collection::vec(entry(), 0..12)
}

fn selectable_count(entries: &[DropdownEntry]) -> usize {
    entries.iter().filter(|e| e.is_selectable()).count()
}

// set_active is left out: on its own it may point away from the open
// panel, which only the handlers keep in sync.
#[derive(Debug, Clone)]
enum Op {
    Key(NavKey),
    Hotkey(char),
    Click(u16, u16),
    SetOpen(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![
            Just(NavKey::Confirm),
            Just(NavKey::Cancel),
            Just(NavKey::Up),
            Just(NavKey::Down),
            Just(NavKey::Left),
            Just(NavKey::Right),
            proptest::char::range('a', 'z').prop_map(NavKey::Char),
        ]
        .prop_map(Op::Key),
        proptest::char::range('a', 'z').prop_map(Op::Hotkey),
        (0u16..50, 0u16..15).prop_map(|(x, y)| Op::Click(x, y)),
        any::<bool>().prop_map(Op::SetOpen),
    ]
}

proptest! {
    #[test]
    fn size_bounds(entries in entries()) {
        let size = compute_size(&entries);
        prop_assert!(size.width >= 8);
        prop_assert_eq!(size.height as usize, entries.len() + 2);
    }

    #[test]
    fn show_highlights_a_selectable_entry(entries in entries(), x in 0u16..40, y in 0u16..20) {
        let mut panel = DropdownPanel::new(entries.clone());
        panel.show(x, y);
        match panel.highlighted() {
            Some(i) => prop_assert!(entries[i].is_selectable()),
            None => prop_assert_eq!(selectable_count(&entries), 0),
        }
    }

    #[test]
    fn navigation_cycles_over_selectable_entries(entries in entries(), down in any::<bool>()) {
        let mut panel = DropdownPanel::new(entries.clone());
        panel.show(0, 1);
        let start = panel.highlighted();
        let k = selectable_count(&entries);
        for _ in 0..k {
            if down { panel.navigate_down() } else { panel.navigate_up() }
            if let Some(i) = panel.highlighted() {
                prop_assert!(entries[i].is_selectable());
            }
        }
        prop_assert_eq!(panel.highlighted(), start);
    }

    #[test]
    fn outside_click_always_dismisses(entries in entries(), x in 0u16..30, y in 0u16..30) {
        let mut panel = DropdownPanel::new(entries);
        panel.show(x, y);
        let rect = panel.rect();
        prop_assert_eq!(panel.handle_click(rect.right(), y), None);
        prop_assert!(!panel.is_visible());
        panel.show(x, y);
        prop_assert_eq!(panel.handle_click(x, rect.bottom()), None);
        prop_assert!(!panel.is_visible());
    }

    #[test]
    fn row_click_picks_exactly_that_entry(entries in entries(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let row = idx.index(entries.len());
        let mut panel = DropdownPanel::new(entries.clone());
        panel.show(2, 1);
        let y = 1 + 1 + row as u16;
        let picked = panel.handle_click(3, y);
        if entries[row].is_selectable() {
            prop_assert_eq!(picked.as_ref(), Some(&entries[row]));
            prop_assert!(!panel.is_visible());
        } else {
            prop_assert_eq!(picked, None);
            prop_assert!(panel.is_visible());
        }
    }

    #[test]
    fn bar_stays_consistent(ops in prop::collection::vec(op(), 0..40)) {
        let mut bar = MenuBar::new(0, 50, 1, vec![
            (MenuEntry::new("File", "file", 'f'), vec![
                DropdownEntry::item("New", "new", Some('n')),
                DropdownEntry::separator(),
                DropdownEntry::item("Quit", "quit", Some('q')),
            ]),
            (MenuEntry::new("Edit", "edit", 'e').disabled(), vec![
                DropdownEntry::item("Undo", "undo", Some('u')),
            ]),
            (MenuEntry::new("View", "view", 'v'), vec![
                DropdownEntry::item("Off", "off", None).disabled(),
            ]),
            (MenuEntry::new("Help", "help", 'h'), vec![]),
        ]);
        for op in ops {
            match op {
                Op::Key(k) => { bar.handle_key_navigation(k); }
                Op::Hotkey(c) => { bar.handle_key(c); }
                Op::Click(x, y) => { bar.handle_click(x, y); }
                Op::SetOpen(o) => bar.set_open(o),
            }
            prop_assert!(bar.is_consistent(), "inconsistent after {:?}", bar);
        }
    }
}
