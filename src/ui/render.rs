//! Clipped painters shared by the menu bar and dropdown panels.
//!
//! Every write is checked against the surface size first; anything at or
//! past the right or bottom edge is skipped, never wrapped.

use ratatui::{layout::Rect, style::Style};

use super::surface::Surface;
use crate::menu::layout::{char_width, TAB_WIDTH};

/// A base character plus the zero-width characters that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub base: char,
    pub combining: Vec<char>,
    pub width: u16,
}

/// Group `text` into cells. Zero-width characters ahead of the first
/// visible one are carried onto it.
pub fn clusters(text: &str) -> Vec<Cluster> {
    let mut out: Vec<Cluster> = Vec::new();
    let mut leading = Vec::new();
    for c in text.chars() {
        let w = char_width(c, TAB_WIDTH) as u16;
        match out.last_mut() {
            Some(prev) if w == 0 => prev.combining.push(c),
            None if w == 0 => leading.push(c),
            _ => {
                let combining = std::mem::take(&mut leading);
                out.push(Cluster { base: c, combining, width: w });
            }
        }
    }
    out
}

fn visible<S: Surface + ?Sized>(s: &S, x: u16, y: u16) -> bool {
    let (w, h) = s.size();
    x < w && y < h
}

pub fn put<S: Surface + ?Sized>(s: &mut S, x: u16, y: u16, ch: char, style: Style) {
    if visible(s, x, y) {
        s.set_content(x, y, ch, &[], style);
    }
}

/// Paint `ch` over columns `x0..x1` of row `y`.
pub fn fill_row<S: Surface + ?Sized>(s: &mut S, x0: u16, x1: u16, y: u16, ch: char, style: Style) {
    for x in x0..x1 {
        put(s, x, y, ch, style);
    }
}

/// One-cell drop shadow: the rectangle shifted by (+1, +1).
pub fn draw_shadow<S: Surface + ?Sized>(s: &mut S, rect: Rect, style: Style) {
    for row in 1..=rect.height {
        let y = rect.y.saturating_add(row);
        fill_row(s, rect.x.saturating_add(1), rect.x.saturating_add(rect.width).saturating_add(1), y, ' ', style);
    }
}

pub fn draw_frame<S: Surface + ?Sized>(s: &mut S, rect: Rect, border: Style, fill: Style) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let last_col = rect.width - 1;
    let last_row = rect.height - 1;
    for row in 0..rect.height {
        let y = rect.y.saturating_add(row);
        for col in 0..rect.width {
            let x = rect.x.saturating_add(col);
            let (ch, style) = match (row, col) {
                (0, 0) => ('┌', border),
                (0, c) if c == last_col => ('┐', border),
                (r, 0) if r == last_row => ('└', border),
                (r, c) if r == last_row && c == last_col => ('┘', border),
                (_, 0) => ('│', border),
                (_, c) if c == last_col => ('│', border),
                (0, _) => ('─', border),
                (r, _) if r == last_row => ('─', border),
                _ => (' ', fill),
            };
            put(s, x, y, ch, style);
        }
    }
}

/// Draw `text` from column `x` on row `y`, stopping before `limit` or the
/// surface edge. A cluster that would straddle the limit is left out.
/// Returns the column after the last drawn cluster.
pub fn draw_text<S, F>(s: &mut S, x: u16, y: u16, limit: u16, text: &str, mut style_for: F) -> u16
where
    S: Surface + ?Sized,
    F: FnMut(char) -> Style,
{
    let (term_w, term_h) = s.size();
    let limit = limit.min(term_w);
    let mut col = x;
    if y >= term_h {
        return col;
    }
    for cluster in clusters(text) {
        if col >= limit || col.saturating_add(cluster.width) > limit {
            break;
        }
        s.set_content(col, y, cluster.base, &cluster.combining, style_for(cluster.base));
        col += cluster.width;
    }
    col
}
