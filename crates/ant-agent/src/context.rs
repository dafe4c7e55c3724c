//! Grid state handed to every ant step.

use ant_core::ColonyConfig;
use ant_grid::{FoodStore, Nest, ObstacleMask, ScentField};

/// Borrowed view of the world an ant steps through.
///
/// Built once per tick by the world and reused for every ant in collection
/// order.  `field` and `food` are mutable: an ant's deposit or pickup is
/// visible to every ant that steps after it in the same tick.
pub struct StepContext<'a> {
    pub config:    &'a ColonyConfig,
    pub field:     &'a mut ScentField,
    pub obstacles: &'a ObstacleMask,
    pub food:      &'a mut FoodStore,
    pub nest:      Nest,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        config:    &'a ColonyConfig,
        field:     &'a mut ScentField,
        obstacles: &'a ObstacleMask,
        food:      &'a mut FoodStore,
        nest:      Nest,
    ) -> Self {
        Self { config, field, obstacles, food, nest }
    }
}
