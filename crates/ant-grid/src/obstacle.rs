//! Impassable cells.

use ant_core::{Cell, Grid};

use crate::Nest;

/// Boolean wall mask over the grid.
///
/// Cells inside the nest radius can never be blocked: a paint stroke that
/// covers them leaves them passable and silently changes the rest.
#[derive(Clone, Debug)]
pub struct ObstacleMask {
    grid:    Grid,
    nest:    Nest,
    blocked: Vec<bool>,
}

impl ObstacleMask {
    /// An all-passable mask with a no-build zone around `nest`.
    pub fn new(grid: Grid, nest: Nest) -> Self {
        Self { grid, nest, blocked: vec![false; grid.len()] }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Set every cell within `radius` of `center` to `blocked`, except cells
    /// in the nest's no-build zone.
    ///
    /// Returns how many cells actually changed.
    pub fn set_region(&mut self, center: Cell, radius: f32, blocked: bool) -> usize {
        let mut changed = 0;
        for cell in self.grid.cells_within(center, radius) {
            if self.nest.contains(cell) {
                continue;
            }
            if let Some(i) = self.grid.index(cell) {
                if self.blocked[i] != blocked {
                    self.blocked[i] = blocked;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Movement query: off-grid cells count as blocked.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.grid.index(cell).is_none_or(|i| self.blocked[i])
    }

    /// Sensing query: `true` only for on-grid, unblocked cells.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.grid.index(cell).is_some_and(|i| !self.blocked[i])
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
    }
}
