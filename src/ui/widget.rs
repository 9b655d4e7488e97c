use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::style::StyleProvider;
use crate::menu::MenuBar;

/// Paints the bar and, on top of everything else, its open dropdown.
///
/// Menus carry absolute screen coordinates, so render this over the whole
/// frame and after the rest of the screen.
pub struct MenuBarWidget<'a, P: StyleProvider + ?Sized> {
    bar: &'a MenuBar,
    styles: &'a P,
}

impl<'a, P: StyleProvider + ?Sized> MenuBarWidget<'a, P> {
    pub fn new(bar: &'a MenuBar, styles: &'a P) -> Self {
        Self { bar, styles }
    }
}

impl<P: StyleProvider + ?Sized> Widget for MenuBarWidget<'_, P> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        self.bar.render(buf, self.styles);
        if let Some(panel) = self.bar.active_dropdown() {
            panel.render(buf, self.styles);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{DropdownEntry, MenuEntry};
    use crate::ui::style::Theme;

    #[test]
    fn dropdown_drawn_over_bar_row_below() {
        let mut bar = MenuBar::new(
            0,
            20,
            1,
            vec![(MenuEntry::new("File", "file", 'i'), vec![DropdownEntry::item("New", "NewTab", None)])],
        );
        bar.handle_key('i');
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        MenuBarWidget::new(&bar, &Theme::default()).render(area, &mut buf);
        assert_eq!(buf.get(1, 0).symbol(), "F");
        assert_eq!(buf.get(0, 1).symbol(), "┌");
        assert_eq!(buf.get(2, 2).symbol(), "N");
    }
}
