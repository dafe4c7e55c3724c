//! Scalar scent field.
//!
//! # Update model
//!
//! Ants write into the front buffer directly while they step, so an ant
//! sees every deposit made earlier in the same tick.  Once per tick the
//! world calls [`ScentField::advance`], which reads only the front buffer,
//! writes the next state into the back buffer, and swaps the two:
//!
//! ```text
//! blended = v * (1 - diffusion) + mean8(v) * diffusion
//! next    = clamp(blended * (1 - evaporation), 0, max_strength)
//! next    = 0 if next < floor
//! ```
//!
//! `mean8` clamps neighbour coordinates at the edges, so a border cell
//! counts itself in place of the missing neighbours.  There is no wrap.

use ant_core::{Cell, Grid};

/// Bounded, non-negative trail strength per cell.
#[derive(Clone, Debug)]
pub struct ScentField {
    grid:         Grid,
    max_strength: f32,
    front:        Vec<f32>,
    back:         Vec<f32>,
}

impl ScentField {
    /// An all-zero field over `grid`.
    pub fn new(grid: Grid, max_strength: f32) -> Self {
        Self {
            grid,
            max_strength,
            front: vec![0.0; grid.len()],
            back:  vec![0.0; grid.len()],
        }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn max_strength(&self) -> f32 {
        self.max_strength
    }

    /// Strength at `cell`; zero off the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> f32 {
        self.grid.index(cell).map_or(0.0, |i| self.front[i])
    }

    /// Row-major view of every cell, for renderers and output writers.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.front
    }

    /// Add `amount` to `cell`, saturating at `max_strength`.
    ///
    /// Non-positive (or NaN) amounts and off-grid cells are ignored.
    pub fn deposit(&mut self, cell: Cell, amount: f32) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        if let Some(i) = self.grid.index(cell) {
            self.front[i] = (self.front[i] + amount).min(self.max_strength);
        }
    }

    /// Arithmetic mean of the field over `cells`.
    ///
    /// Off-grid cells are skipped.  An empty (or fully off-grid) set reads
    /// as zero: an ant whose sensors see nothing perceives no signal.
    pub fn sample_average<I>(&self, cells: I) -> f32
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut sum = 0.0_f32;
        let mut n = 0_u32;
        for cell in cells {
            if let Some(i) = self.grid.index(cell) {
                sum += self.front[i];
                n += 1;
            }
        }
        if n == 0 { 0.0 } else { sum / n as f32 }
    }

    /// Diffuse, evaporate, and swap buffers.  See the module docs.
    pub fn advance(&mut self, evaporation_rate: f32, diffusion_weight: f32, floor: f32) {
        let w = self.grid.width as usize;
        let h = self.grid.height as usize;
        let keep = 1.0 - evaporation_rate;
        let front = &self.front;

        for y in 0..h {
            for x in 0..w {
                let i = y * w + x;
                let current = front[i];
                let blended = if diffusion_weight > 0.0 {
                    let mean = neighbour_mean(front, w, h, x, y);
                    current * (1.0 - diffusion_weight) + mean * diffusion_weight
                } else {
                    current
                };
                let mut next = (blended * keep).clamp(0.0, self.max_strength);
                if next < floor {
                    next = 0.0;
                }
                self.back[i] = next;
            }
        }

        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Reset every cell to zero.
    pub fn clear(&mut self) {
        self.front.fill(0.0);
        self.back.fill(0.0);
    }

    /// Sum over all cells.
    pub fn total(&self) -> f64 {
        self.front.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value.
    pub fn max_value(&self) -> f32 {
        self.front.iter().copied().fold(0.0, f32::max)
    }
}

/// Mean of the 8 neighbours of `(x, y)`, clamping coordinates at the edges.
#[inline]
fn neighbour_mean(values: &[f32], w: usize, h: usize, x: usize, y: usize) -> f32 {
    let mut sum = 0.0;
    for dy in -1_i64..=1 {
        for dx in -1_i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = (x as i64 + dx).clamp(0, w as i64 - 1) as usize;
            let ny = (y as i64 + dy).clamp(0, h as i64 - 1) as usize;
            sum += values[ny * w + nx];
        }
    }
    sum / 8.0
}
