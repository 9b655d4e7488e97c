use ratatui::{buffer::Buffer, style::Style};

/// Character grid the menus paint into.
pub trait Surface {
    /// Width and height in cells; coordinates at or past these are off-screen.
    fn size(&self) -> (u16, u16);

    /// Write one cell. Out-of-range coordinates must be ignored.
    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style);
}

impl Surface for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.area.right(), self.area.bottom())
    }

    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) {
        let area = self.area;
        if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
            return;
        }
        let mut symbol = String::with_capacity(ch.len_utf8() + combining.len() * 2);
        symbol.push(ch);
        symbol.extend(combining);
        // reset first: Cell::set_style merges modifiers with what was there
        let cell = self.get_mut(x, y);
        cell.reset();
        cell.set_symbol(&symbol).set_style(style);
    }
}
