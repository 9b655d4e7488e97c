use termenu::menu::{compute_size, DropdownEntry, MenuBar, MenuEntry, NavKey};
use termenu::MenuConfig;

fn file_and_edit() -> MenuBar {
    MenuBar::new(
        0,
        80,
        1,
        vec![
            (
                MenuEntry::new("File", "file", 'i'),
                vec![
                    DropdownEntry::item("New", "NewTab", Some('N')),
                    DropdownEntry::item("Open", "Open", Some('O')),
                    DropdownEntry::separator(),
                    DropdownEntry::item("Save", "Save", Some('S')),
                    DropdownEntry::item("Save As", "SaveAs", Some('A')),
                    DropdownEntry::separator(),
                    DropdownEntry::item("Quit", "Quit", Some('Q')),
                ],
            ),
            (
                MenuEntry::new("Edit", "edit", 'd'),
                vec![DropdownEntry::item("Undo", "Undo", Some('U'))],
            ),
        ],
    )
}

#[test]
fn hotkey_opens_file_and_up_wraps_to_quit() {
    let mut bar = file_and_edit();
    assert!(bar.handle_key('i'));
    assert_eq!(bar.active(), Some(0));
    assert!(bar.is_open());

    let panel = bar.active_dropdown().expect("file dropdown open");
    assert_eq!(panel.highlighted(), Some(0));
    assert_eq!(panel.active_item().map(|e| e.text.as_str()), Some("New"));

    bar.handle_key_navigation(NavKey::Up);
    let panel = bar.active_dropdown().expect("still open");
    assert_eq!(panel.active_item().map(|e| e.text.as_str()), Some("Quit"));
}

#[test]
fn save_as_width_is_eleven() {
    let size = compute_size(&[
        DropdownEntry::item("Save", "Save", None),
        DropdownEntry::item("Save As", "SaveAs", None),
    ]);
    assert_eq!(size.width, 11);
}

#[test]
fn outside_click_hides_dropdown() {
    let mut bar = file_and_edit();
    bar.handle_key('i');
    assert!(bar.active_dropdown().is_some_and(|p| p.is_visible()));
    assert_eq!(bar.handle_click(60, 20), None);
    assert!(bar.dropdown("file").is_some_and(|p| !p.is_visible()));
}

#[test]
fn closing_leaves_no_visible_panel() {
    let mut bar = file_and_edit();
    bar.set_active(Some(1));
    bar.set_open(true);
    assert!(bar.dropdown("edit").is_some_and(|p| p.is_visible()));
    bar.set_open(false);
    assert_eq!(bar.active(), Some(1));
    assert!(["file", "edit"].iter().all(|a| bar.dropdown(a).is_some_and(|p| !p.is_visible())));
}

#[test]
fn switching_menus_hides_previous_panel() {
    let mut bar = file_and_edit();
    bar.handle_key('i');
    bar.handle_key_navigation(NavKey::Right);
    assert_eq!(bar.menu_action(), "edit");
    assert!(bar.dropdown("file").is_some_and(|p| !p.is_visible()));
    assert!(bar.is_consistent());
}

#[test]
fn builtin_config_round_trip_through_keys() {
    let mut bar = MenuConfig::default().menu_bar(80).expect("builtin menus");
    bar.handle_key_navigation(NavKey::Char('S'));
    assert_eq!(bar.menu_action(), "search");
    bar.handle_key_navigation(NavKey::Down);
    bar.handle_key_navigation(NavKey::Down);
    let picked = bar.handle_key_navigation(NavKey::Confirm).expect("entry chosen");
    assert_eq!(picked.action, "FindPrevious");
    assert!(!bar.is_open());
}
