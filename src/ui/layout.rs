use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Body area under a one-row menu bar, with a footer of `footer_height`.
pub struct EditorLayout {
    pub bar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn editor_layout(size: Rect, footer_height: u16) -> EditorLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(size);
    EditorLayout { bar: chunks[0], body: chunks[1], footer: chunks[2] }
}

pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_abs_fits_inside() {
        let r = centered_rect_abs(10, 4, Rect::new(0, 0, 40, 20));
        assert_eq!(r, Rect::new(15, 8, 10, 4));
        let tiny = centered_rect_abs(50, 50, Rect::new(0, 0, 10, 6));
        assert_eq!((tiny.width, tiny.height), (8, 4));
    }

    #[test]
    fn editor_layout_reserves_bar_and_footer() {
        let l = editor_layout(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(l.bar, Rect::new(0, 0, 80, 1));
        assert_eq!(l.footer, Rect::new(0, 21, 80, 3));
        assert_eq!(l.body.height, 20);
    }
}
