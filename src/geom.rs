use boolinator::Boolinator;
use std::ops::{Add, Sub};

/// A position on the conceptually infinite plane, in global coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Non-negative dimensions of a rectangle.
///
/// Construction with a negative dimension is a caller contract breach and
/// panics. This includes subtraction that would go below zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i64,
    height: i64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    #[inline]
    pub fn new(width: i64, height: i64) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "cellgrid::Size::new: dimensions must be non-negative ({}x{})",
            width,
            height
        );
        Size { width, height }
    }

    #[inline]
    pub fn width(self) -> i64 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i64 {
        self.height
    }

    /// Number of cells a rectangle of this size covers.
    #[inline]
    pub fn area(self) -> usize {
        (self.width * self.height) as usize
    }

    /// A zero-width or zero-height size covers no cells at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Add for Size {
    type Output = Size;

    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

/// An axis-aligned rectangle covering the inclusive range
/// `[origin, origin + size - (1, 1)]` in global coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// The 1x1 rectangle covering exactly `point`.
    #[inline]
    pub fn unit(point: Point) -> Self {
        Rect::new(point, Size::new(1, 1))
    }

    /// The last point covered by the rectangle. For a zero-size rectangle
    /// this lies before `origin` and no point is covered.
    #[inline]
    pub fn origin_end(self) -> Point {
        self.origin + Point::new(self.size.width() - 1, self.size.height() - 1)
    }

    /// The overlap of two rectangles, or `None` when the overlap is
    /// non-positive on either axis.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x = self.origin.x.max(other.origin.x);
        let y = self.origin.y.max(other.origin.y);
        let width = self.origin_end().x.min(other.origin_end().x) - x + 1;
        let height = self.origin_end().y.min(other.origin_end().y) - y + 1;
        (width > 0 && height > 0)
            .as_some_from(|| Rect::new(Point::new(x, y), Size::new(width, height)))
    }

    /// A point is contained iff the unit rectangle at that point overlaps
    /// this one.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        self.intersect(Rect::unit(point)).is_some()
    }

    /// The rectangle grown by `margin` cells on all four sides.
    #[inline]
    pub fn expand(self, margin: i64) -> Rect {
        Rect::new(
            self.origin - Point::new(margin, margin),
            self.size + Size::new(2 * margin, 2 * margin),
        )
    }

    /// All covered points in row-major order (y ascending, then x ascending).
    /// Empty for a zero-size rectangle. `Rect` is `Copy`, so the sequence can
    /// be restarted by calling this again.
    #[inline]
    pub fn points(self) -> RectPoints {
        RectPoints {
            rect: self,
            cur: self.origin,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = RectPoints;

    #[inline]
    fn into_iter(self) -> RectPoints {
        self.points()
    }
}

/// Row-major iterator over the points of a [`Rect`].
#[derive(Copy, Clone, Debug)]
pub struct RectPoints {
    rect: Rect,
    cur: Point,
}

impl Iterator for RectPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.rect.contains(self.cur) {
            return None;
        }
        let point = self.cur;
        if self.cur.x < self.rect.origin_end().x {
            self.cur.x += 1;
        } else {
            self.cur = Point::new(self.rect.origin.x, self.cur.y + 1);
        }
        Some(point)
    }
}
