use crate::geom::{Point, Rect, Size};
use crate::grid::{Cell, GridState};
use crate::Automaton;
use log::debug;

/// Wolfram-style 1-D automaton driven by an 8-entry rule table.
///
/// Each generation is one row of the grid: row 0 is the initial state and the
/// bottom row is the latest generation, so the viewport height is
/// `generations_simulated + 1`. Cells beyond the materialized row read as
/// inactive; there is no wraparound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Elementary {
    rule: u8,
}

impl Elementary {
    /// An engine for the given rule code. Bit `b` of the code is the next
    /// state for the neighborhood whose binary encoding
    /// (`left*4 + center*2 + right`) equals `b`.
    pub fn new(rule: u8) -> Self {
        Elementary { rule }
    }

    fn next_cell(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        let neighborhood = left.bit() << 2 | center.bit() << 1 | right.bit();
        Cell::from(self.rule >> neighborhood & 1 == 1)
    }
}

impl Automaton for Elementary {
    type Cell = Cell;

    fn simulate(&self, state: &GridState, generations: u32) -> GridState {
        debug!(
            "elementary rule {}: simulating {} generations",
            self.rule, generations
        );
        let mut result = state.clone();
        for _ in 0..generations {
            // A rule can only activate cells adjacent to the previous row,
            // so the reachable region widens by one cell per side.
            let viewport = result.viewport();
            result.set_viewport(Rect::new(
                viewport.origin - Point::new(1, 0),
                viewport.size + Size::new(2, 1),
            ));
            let viewport = result.viewport();
            // Still no source row to derive from: an automaton with no cells
            // produces no cells, forever.
            if viewport.size.height() < 2 {
                return result;
            }
            let prev_y = viewport.origin_end().y - 1;
            let next_y = viewport.origin_end().y;
            for x in viewport.origin.x..=viewport.origin_end().x {
                let cell = self.next_cell(
                    result.get(Point::new(x - 1, prev_y)),
                    result.get(Point::new(x, prev_y)),
                    result.get(Point::new(x + 1, prev_y)),
                );
                result.set(Point::new(x, next_y), cell);
            }
        }
        result
    }
}

/// A row of cells from the big-endian bits of `code`, `length` cells wide.
/// The least significant bit lands in the rightmost cell.
pub fn row_from_bits(code: u8, length: u32) -> Vec<Cell> {
    (0..length)
        .rev()
        .map(|bit| Cell::from(bit < 8 && code >> bit & 1 == 1))
        .collect()
}
