//! Cellgrid is a library intended to run cellular automata simulations on a
//! conceptually infinite grid.
//!
//! Only the rectangle of cells that currently matter is materialized: a
//! [`GridState`] pairs a flat cell buffer with a viewport rectangle mapping
//! it onto the global plane, and the two shipped engines ([`Elementary`] and
//! [`Life`]) grow that viewport as the simulation demands. Reads outside the
//! viewport yield the default cell and writes outside it are dropped, so
//! neither editing nor simulation code ever bounds-checks.

mod elementary;
mod geom;
mod grid;
mod life;

pub mod clipboard;
#[cfg(feature = "snapshot")]
pub mod snapshot;

pub use elementary::*;
pub use geom::*;
pub use grid::*;
pub use life::*;

/// Defines an automaton that advances a grid state by whole generations.
///
/// All new cells are produced from the previous generation's snapshot only,
/// so per-cell update order can never break the simulation. Engines never
/// mutate the caller's state: `simulate` copies on entry and returns an
/// independently owned result. Simulating zero generations returns an equal
/// copy.
pub trait Automaton {
    /// The cells of the grid.
    type Cell: Clone + Default;

    /// The state of the field after `generations` more generations.
    fn simulate(
        &self,
        state: &GridState<Self::Cell>,
        generations: u32,
    ) -> GridState<Self::Cell>;
}
