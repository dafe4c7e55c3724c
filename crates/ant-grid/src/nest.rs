//! The colony's nest.

use ant_core::{Cell, Point};

/// Fixed spawn and delivery point.
///
/// Set once when the world is built and never moved.  `radius` is both the
/// delivery reach for returning ants and the no-build zone for obstacles.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nest {
    pub cell:   Cell,
    pub radius: f32,
}

impl Nest {
    #[inline]
    pub fn new(cell: Cell, radius: f32) -> Self {
        Self { cell, radius }
    }

    /// `true` if `cell` is within the nest radius.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cell.within(cell, self.radius)
    }

    /// The point returning ants steer toward.
    #[inline]
    pub fn target(&self) -> Point {
        self.cell.center()
    }
}
