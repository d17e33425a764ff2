//! Interface types for the persistence and preset-catalog collaborators.
//!
//! Both formats are origin-less: they carry only the rectangular block of
//! cells, row-major with `true` meaning active, and rebuild their state at
//! the global zero point. Decode errors belong to the collaborator layer and
//! surface as [`bincode::Result`], never inside the core contract.

use crate::geom::{Point, Rect, Size};
use crate::grid::{Cell, GridState};
use serde::{Deserialize, Serialize};

/// A named snapshot of a grid, as the persistence collaborator stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub field: Vec<Vec<bool>>,
}

impl Snapshot {
    /// Capture the materialized cells of `state` under `name`. The viewport
    /// origin is not part of the format.
    pub fn capture(name: impl Into<String>, state: &GridState) -> Self {
        Snapshot {
            name: name.into(),
            field: state
                .rows()
                .map(|row| row.iter().map(|cell| cell.is_active()).collect())
                .collect(),
        }
    }

    /// Rebuild a state at the global zero point. Ragged or short rows are
    /// tolerated; uncovered positions read as inactive.
    pub fn restore(&self) -> GridState {
        let width = self.field.iter().map(Vec::len).max().unwrap_or(0);
        let viewport = Rect::new(
            Point::ZERO,
            Size::new(width as i64, self.field.len() as i64),
        );
        let mut state = GridState::with_viewport(viewport);
        for (y, row) in self.field.iter().enumerate() {
            for (x, &active) in row.iter().enumerate() {
                state.set(Point::new(x as i64, y as i64), Cell::from(active));
            }
        }
        state
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// One entry of the remote preset catalog: a flattened row-major field,
/// `index = row * width + col`. Indices beyond `cells` default to inactive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetItem {
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub name: String,
    pub cells: Vec<bool>,
}

impl PresetItem {
    /// Materialize the preset at the global zero point.
    pub fn to_state(&self) -> GridState {
        let viewport = Rect::new(
            Point::ZERO,
            Size::new(self.width as i64, self.height as i64),
        );
        let mut state = GridState::with_viewport(viewport);
        for (index, point) in viewport.points().enumerate() {
            if self.cells.get(index).copied().unwrap_or(false) {
                state.set(point, Cell::Active);
            }
        }
        state
    }
}
