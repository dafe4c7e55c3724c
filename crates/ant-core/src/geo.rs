//! Grid geometry: integer cells, continuous points, and heading arithmetic.
//!
//! Ants move in continuous coordinates over `[0, width) x [0, height)`; the
//! cell an ant occupies is `floor(position)`.  `Cell` is signed so that
//! sensor samples that fall off the grid are representable and can be
//! rejected by [`Grid::contains`] instead of wrapping.

use std::f32::consts::{PI, TAU};
use std::fmt;

/// Gap kept between a clamped coordinate and the grid's exclusive upper bound.
const EDGE_EPSILON: f32 = 1e-3;

// ── Cell ─────────────────────────────────────────────────────────────────────

/// An integer grid cell coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in cells.  Computed in `f64`, so cells at opposite
    /// ends of the `i32` range cannot overflow.
    #[inline]
    pub fn distance(self, other: Cell) -> f32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy) as f32
    }

    /// `true` if `other` lies within `radius` cells (inclusive).
    #[inline]
    pub fn within(self, other: Cell, radius: f32) -> bool {
        self.distance(other) <= radius
    }

    /// The continuous point at the centre of this cell.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

// ── Point ────────────────────────────────────────────────────────────────────

/// A continuous position in cell units.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The cell containing this point.
    #[inline]
    pub fn cell(self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// The point `distance` cells away along `heading` (radians).
    #[inline]
    pub fn advance(self, heading: f32, distance: f32) -> Point {
        let (sin, cos) = heading.sin_cos();
        Point::new(self.x + cos * distance, self.y + sin * distance)
    }

    /// Bearing in radians from `self` toward `target`.
    #[inline]
    pub fn bearing_to(self, target: Point) -> f32 {
        (target.y - self.y).atan2(target.x - self.x)
    }

}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Grid ─────────────────────────────────────────────────────────────────────

/// Dimensions of the simulation grid, and the row-major cell layout shared
/// by every per-cell buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub width:  u32,
    pub height: u32,
}

impl Grid {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if `cell` lies on the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// `true` if `x` lies in `[0, width)`.
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= 0.0 && x < self.width as f32
    }

    /// `true` if `y` lies in `[0, height)`.
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= 0.0 && y < self.height as f32
    }

    /// Row-major buffer index of `cell`, or `None` off the grid.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// The cell at a row-major buffer index.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    /// Clamp `cell` onto the grid.
    #[inline]
    pub fn clamp_cell(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.clamp(0, self.width.saturating_sub(1) as i32),
            cell.y.clamp(0, self.height.saturating_sub(1) as i32),
        )
    }

    /// Clamp a continuous point into `[0, width) x [0, height)`.
    #[inline]
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.width as f32 - EDGE_EPSILON),
            p.y.clamp(0.0, self.height as f32 - EDGE_EPSILON),
        )
    }

    /// The centre cell `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Every cell within `radius` of `center`, clipped to the grid, in
    /// row-major order.
    ///
    /// `center` may lie anywhere in `i32` space, on or off the grid, and
    /// `radius` may be arbitrarily large.  The bounding box is computed in
    /// `i64`, so neither can overflow.
    pub fn cells_within(&self, center: Cell, radius: f32) -> impl Iterator<Item = Cell> + '_ {
        // Wider than any distance between an i32 cell and the grid.
        const MAX_REACH: f32 = 8.0e9;
        let r = radius.max(0.0).min(MAX_REACH).floor() as i64;
        let span = |c: i32, len: u32| {
            let top = i64::from(len) - 1;
            let lo = (i64::from(c) - r).max(0).min(top) as i32;
            let hi = (i64::from(c) + r).max(0).min(top) as i32;
            (lo, hi)
        };
        let (lo_x, hi_x) = span(center.x, self.width);
        let (lo_y, hi_y) = span(center.y, self.height);
        let lo = Cell::new(lo_x, lo_y);
        let hi = Cell::new(hi_x, hi_y);
        (lo.y..=hi.y)
            .flat_map(move |y| (lo.x..=hi.x).map(move |x| Cell::new(x, y)))
            .filter(move |&c| self.contains(c) && c.within(center, radius))
    }
}

// ── Angles ───────────────────────────────────────────────────────────────────

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
#[inline]
pub fn angle_diff(to: f32, from: f32) -> f32 {
    let d = normalize_angle(to - from);
    if d > PI { d - TAU } else { d }
}
