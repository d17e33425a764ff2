use crate::geom::{Point, Rect, Size};
use crate::grid::{Cell, GridState};
use crate::Automaton;
use enum_iterator::IntoEnumIterator;
use log::{debug, trace};

/// Conway's Game of Life on the auto-resizing grid.
///
/// Each generation scans the current viewport expanded by one cell on all
/// sides (the only region a new activation can occur in) and grows the result
/// viewport reactively, one direction at a time, so the materialized
/// rectangle stays tight to the alive region instead of ballooning uniformly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Life;

/// The single direction a viewport grows by when an active cell lands
/// outside it. Checked in declaration order: a point outside on both axes
/// only grows the x side this time around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
enum Growth {
    Left,
    Right,
    Up,
    Down,
}

impl Growth {
    fn needed(self, viewport: Rect, point: Point) -> bool {
        match self {
            Growth::Left => point.x < viewport.origin.x,
            Growth::Right => point.x > viewport.origin_end().x,
            Growth::Up => point.y < viewport.origin.y,
            Growth::Down => point.y > viewport.origin_end().y,
        }
    }

    fn grown(self, viewport: Rect, point: Point) -> Rect {
        let origin = viewport.origin;
        let size = viewport.size;
        match self {
            Growth::Left => Rect::new(Point::new(point.x, origin.y), size + Size::new(1, 0)),
            Growth::Right => Rect::new(origin, size + Size::new(1, 0)),
            Growth::Up => Rect::new(Point::new(origin.x, point.y), size + Size::new(0, 1)),
            Growth::Down => Rect::new(origin, size + Size::new(0, 1)),
        }
    }
}

impl Life {
    fn count_neighbors(state: &GridState, point: Point) -> u32 {
        let mut count = 0;
        for shift_y in -1..=1 {
            for shift_x in -1..=1 {
                if shift_x == 0 && shift_y == 0 {
                    continue;
                }
                count += u32::from(state.get(point + Point::new(shift_x, shift_y)).bit());
            }
        }
        count
    }

    fn next_cell(state: &GridState, point: Point) -> Cell {
        let neighbors = Self::count_neighbors(state, point);
        match (state.get(point), neighbors) {
            (Cell::Active, 2) | (Cell::Active, 3) => Cell::Active,
            (Cell::Inactive, 3) => Cell::Active,
            _ => Cell::Inactive,
        }
    }

    fn ensure_included(next: &mut GridState, point: Point) {
        let viewport = next.viewport();
        if let Some(growth) = Growth::into_enum_iter().find(|g| g.needed(viewport, point)) {
            next.set_viewport(growth.grown(viewport, point));
        }
    }
}

impl Automaton for Life {
    type Cell = Cell;

    fn simulate(&self, state: &GridState, generations: u32) -> GridState {
        debug!("life: simulating {} generations", generations);
        let mut current = state.clone();
        for generation in 0..generations {
            let mut next = current.clone();
            for point in current.viewport().expand(1).points() {
                let cell = Self::next_cell(&current, point);
                if cell.is_active() {
                    Self::ensure_included(&mut next, point);
                }
                next.set(point, cell);
            }
            current = next;
            trace!(
                "life: generation {} done, viewport {:?}",
                generation + 1,
                current.viewport()
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> GridState {
        GridState::from_rows(vec![vec![Cell::Active; 3]], Point::ZERO)
    }

    #[test]
    fn empty_field_never_grows() {
        let state: GridState = GridState::new();
        assert_eq!(Life.simulate(&state, 10), state);
    }

    #[test]
    fn zero_generations_returns_equal_copy() {
        let state = blinker();
        assert_eq!(Life.simulate(&state, 0), state);
    }

    #[test]
    fn simulate_does_not_mutate_input() {
        let state = blinker();
        let before = state.clone();
        Life.simulate(&state, 3);
        assert_eq!(state, before);
    }

    #[test]
    fn blinker_half_period() {
        let next = Life.simulate(&blinker(), 1);
        let expected = GridState::from_rows(
            vec![vec![Cell::Inactive, Cell::Active, Cell::Inactive]; 3],
            Point::new(0, -1),
        );
        assert_eq!(next, expected);
    }

    #[test]
    fn blinker_full_period() {
        // The viewport only ever grows, so the original row comes back
        // centered in the 3x3 rectangle claimed by the first half-period.
        let next = Life.simulate(&blinker(), 2);
        let expected = GridState::from_rows(
            vec![
                vec![Cell::Inactive; 3],
                vec![Cell::Active; 3],
                vec![Cell::Inactive; 3],
            ],
            Point::new(0, -1),
        );
        assert_eq!(next, expected);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = GridState::from_rows(vec![vec![Cell::Active; 2]; 2], Point::ZERO);
        assert_eq!(Life.simulate(&block, 4), block);
    }

    #[test]
    fn tub_is_a_still_life() {
        let tub = GridState::from_rows(
            vec![
                vec![Cell::Inactive, Cell::Active, Cell::Inactive],
                vec![Cell::Active, Cell::Inactive, Cell::Active],
                vec![Cell::Inactive, Cell::Active, Cell::Inactive],
            ],
            Point::new(-1, -1),
        );
        assert_eq!(Life.simulate(&tub, 3), tub);
    }

    #[test]
    fn lone_cells_die_without_growth() {
        let state = GridState::from_rows(
            vec![
                vec![Cell::Active, Cell::Inactive],
                vec![Cell::Inactive, Cell::Inactive],
            ],
            Point::ZERO,
        );
        let next = Life.simulate(&state, 1);
        // Nothing becomes active, so the viewport is untouched.
        assert_eq!(next.viewport(), state.viewport());
        assert!(next.cells().iter().all(|cell| !cell.is_active()));
    }

    #[test]
    fn growth_is_directional_not_uniform() {
        // A vertical blinker only claims columns, never rows.
        let state = GridState::from_rows(vec![vec![Cell::Active]; 3], Point::ZERO);
        let next = Life.simulate(&state, 1);
        assert_eq!(
            next.viewport(),
            Rect::new(Point::new(-1, 0), Size::new(3, 3))
        );
        let expected = GridState::from_rows(
            vec![
                vec![Cell::Inactive; 3],
                vec![Cell::Active; 3],
                vec![Cell::Inactive; 3],
            ],
            Point::new(-1, 0),
        );
        assert_eq!(next, expected);
    }
}
