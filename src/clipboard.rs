//! Row-string codec for the clipboard collaborator.
//!
//! A rectangular cell block travels as one string per row, one character per
//! cell: `'1'` active, anything else inactive. Decoding tolerates ragged
//! input; positions outside the available strings or characters read as
//! inactive.

use crate::geom::{Point, Rect, Size};
use crate::grid::{Cell, GridState};

/// Encode the materialized cells, one string per row in row order.
pub fn encode(state: &GridState) -> Vec<String> {
    state
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_active() { '1' } else { '0' })
                .collect()
        })
        .collect()
}

/// Decode row strings into a state at the global zero point, wide enough for
/// the longest row.
pub fn decode<S: AsRef<str>>(lines: &[S]) -> GridState {
    let width = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let viewport = Rect::new(Point::ZERO, Size::new(width as i64, lines.len() as i64));
    let mut state = GridState::with_viewport(viewport);
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.as_ref().chars().enumerate() {
            state.set(
                Point::new(x as i64, y as i64),
                Cell::from(ch == '1'),
            );
        }
    }
    state
}
