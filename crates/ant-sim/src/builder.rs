//! Fluent builder for constructing a [`World`].

use ant_core::{Cell, ColonyConfig};

use crate::{SimResult, World};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                           |
/// |---------------------------|-----------------------------------|
/// | `.seed(s)`                | `0`                               |
/// | `.population(n)`          | `config.default_population`       |
/// | `.food(cell, amount)`     | no food                           |
/// | `.obstacle(cell, radius)` | no walls                          |
/// | `.snapshot_interval(n)`   | `0` (no snapshots)                |
///
/// Initial food and walls are applied once at build time; a later
/// [`World::reset`] clears them like any other edit.
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(ColonyConfig::default())
///     .seed(7)
///     .population(500)
///     .food(Cell::new(30, 30), 100)
///     .obstacle(Cell::new(60, 75), 6.0)
///     .build()?;
/// ```
pub struct WorldBuilder {
    config:            ColonyConfig,
    seed:              u64,
    population:        Option<usize>,
    food:              Vec<(Cell, u32)>,
    obstacles:         Vec<(Cell, f32)>,
    snapshot_interval: u64,
}

impl WorldBuilder {
    pub fn new(config: ColonyConfig) -> Self {
        Self {
            config,
            seed:              0,
            population:        None,
            food:              Vec::new(),
            obstacles:         Vec::new(),
            snapshot_interval: 0,
        }
    }

    /// Seed for every random draw in the world (spawns and all ants).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Initial ant count; clamped to the configured bounds at build time.
    pub fn population(mut self, n: usize) -> Self {
        self.population = Some(n);
        self
    }

    /// Place a food pile (merge rules apply between calls).
    pub fn food(mut self, cell: Cell, amount: u32) -> Self {
        self.food.push((cell, amount));
        self
    }

    /// Paint a wall disc (the nest zone stays open).
    pub fn obstacle(mut self, cell: Cell, radius: f32) -> Self {
        self.obstacles.push((cell, radius));
        self
    }

    /// Call `WorldObserver::on_snapshot` every `n` ticks (0 disables).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the configuration and return a populated [`World`].
    pub fn build(self) -> SimResult<World> {
        self.config.validate()?;

        let population = self.population.unwrap_or(self.config.default_population);
        let mut world = World::empty(self.config, self.seed, self.snapshot_interval);
        world.reset(population);

        for (cell, radius) in self.obstacles {
            world.set_obstacle(cell, true, radius);
        }
        for (cell, amount) in self.food {
            world.add_food(cell, amount);
        }
        Ok(world)
    }
}

impl World {
    /// Shorthand for `WorldBuilder::new(config).seed(seed).build()`.
    pub fn new(config: ColonyConfig, seed: u64) -> SimResult<World> {
        WorldBuilder::new(config).seed(seed).build()
    }
}
