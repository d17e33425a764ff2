use crate::geom::{Point, Rect, Size};
use itertools::Itertools;
use std::fmt;

/// The binary cell alphabet of the shipped automata.
///
/// [`GridState`] is generic over its cell type; only the two engines require
/// this particular alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Inactive,
    Active,
}

impl Cell {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Cell::Active
    }

    /// 1 for active, 0 for inactive. Used to build neighborhood codes.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Cell::Active => 1,
            Cell::Inactive => 0,
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Cell::Inactive
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(active: bool) -> Self {
        if active {
            Cell::Active
        } else {
            Cell::Inactive
        }
    }
}

impl From<Cell> for bool {
    #[inline]
    fn from(cell: Cell) -> bool {
        cell.is_active()
    }
}

/// The materialized window onto a conceptually infinite plane of cells.
///
/// Cells are stored in a flat row-major buffer; the `viewport` rectangle maps
/// the buffer's index (0, 0) to `origin` in global coordinates. Everything
/// outside the viewport reads as the default cell, and writes outside it are
/// silently dropped. The only operation that changes the materialized extent
/// is [`GridState::set_viewport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState<C = Cell> {
    cells: Vec<C>,
    origin: Point,
    size: Size,
}

impl<C: Clone + Default> GridState<C> {
    /// An empty state: zero-size viewport at the global zero point.
    pub fn new() -> Self {
        GridState {
            cells: Vec::new(),
            origin: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// A default-filled state covering `viewport`.
    pub fn with_viewport(viewport: Rect) -> Self {
        GridState {
            cells: vec![C::default(); viewport.size.area()],
            origin: viewport.origin,
            size: viewport.size,
        }
    }

    /// Build a state from explicit rows placed at `origin`. Rows must all
    /// have the same length; a ragged input is a caller contract breach.
    pub fn from_rows(rows: Vec<Vec<C>>, origin: Point) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "cellgrid::GridState::from_rows: rows must all have equal length"
        );
        let size = Size::new(width as i64, rows.len() as i64);
        GridState {
            cells: rows.into_iter().flatten().collect(),
            origin,
            size,
        }
    }

    /// The global rectangle currently materialized.
    #[inline]
    pub fn viewport(&self) -> Rect {
        Rect::new(self.origin, self.size)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    fn index_of(&self, point: Point) -> usize {
        let local = point - self.origin;
        (local.y * self.size.width() + local.x) as usize
    }

    /// The cell at a global point. Total: outside the viewport this is the
    /// default cell, never an error.
    pub fn get(&self, point: Point) -> C {
        if self.viewport().contains(point) {
            self.cells[self.index_of(point)].clone()
        } else {
            C::default()
        }
    }

    /// Overwrite the cell at a global point. Total: outside the viewport
    /// this is a silent no-op and never resizes the grid.
    pub fn set(&mut self, point: Point, cell: C) {
        if self.viewport().contains(point) {
            let ix = self.index_of(point);
            self.cells[ix] = cell;
        }
    }

    /// A new state covering `rect`, filled from this one. Portions of `rect`
    /// outside the current viewport come out default-filled.
    pub fn region(&self, rect: Rect) -> Self {
        let mut sub = self.clone();
        sub.set_viewport(rect);
        sub
    }

    /// Write `source` over `rect`, point by point. `source` need not match
    /// `rect`: where it does not cover a point its default is written, and
    /// points of `rect` outside this viewport are dropped by `set`.
    pub fn set_region(&mut self, rect: Rect, source: &Self) {
        for point in rect.points() {
            self.set(point, source.get(point));
        }
    }

    /// Re-origin the grid to `viewport`. Cells in the overlap of the old and
    /// new viewports keep their values at their global positions; cells newly
    /// introduced are default-filled; cells no longer covered are discarded.
    pub fn set_viewport(&mut self, viewport: Rect) {
        let width = viewport.size.width();
        let mut cells = vec![C::default(); viewport.size.area()];
        if let Some(overlap) = viewport.intersect(self.viewport()) {
            for point in overlap.points() {
                let local = point - viewport.origin;
                cells[(local.y * width + local.x) as usize] =
                    self.cells[self.index_of(point)].clone();
            }
        }
        self.cells = cells;
        self.origin = viewport.origin;
        self.size = viewport.size;
    }

    /// Move the viewport's origin, keeping its size. Content is carried by
    /// the same overlap rule as [`GridState::set_viewport`].
    #[inline]
    pub fn translate(&mut self, to: Point) {
        self.set_viewport(Rect::new(to, self.size));
    }

    /// The flat row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// The materialized rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::Chunks<'_, C> {
        // chunks panics on 0; an empty buffer yields no chunks either way.
        self.cells.chunks((self.size.width() as usize).max(1))
    }
}

impl<C: Clone + Default> Default for GridState<C> {
    fn default() -> Self {
        GridState::new()
    }
}

impl fmt::Display for GridState<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_active() { '1' } else { '0' })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{}", rendered)
    }
}
