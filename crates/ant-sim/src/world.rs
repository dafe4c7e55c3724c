//! The `World` struct and its tick loop.

use std::f32::consts::TAU;

use log::{debug, trace};

use ant_agent::{Ant, StepContext, StepOutcome};
use ant_core::{AgentId, AgentRng, Cell, ColonyConfig, Grid, Point, SimRng, Tick};
use ant_grid::{FoodStore, Nest, ObstacleMask, ScentField};

use crate::WorldObserver;

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick:       Tick,
    pub pickups:    u32,
    pub deliveries: u32,
    pub bounces:    u32,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The whole colony: grid state, ants, nest, and score.
///
/// All state is owned here and only mutated through `&mut self`, so editing
/// calls (food, walls, population) always land between ticks.  Renderers
/// read through the accessors.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    config: ColonyConfig,
    seed:   u64,

    /// World-level RNG for spawn jitter and headings.
    rng: SimRng,

    field:     ScentField,
    obstacles: ObstacleMask,
    food:      FoodStore,
    nest:      Nest,

    /// Ants in step order.
    ants: Vec<Ant>,
    /// Per-ant RNGs, parallel to `ants` so both can be borrowed mutably.
    rngs: Vec<AgentRng>,

    tick:  Tick,
    score: u64,

    /// Call `on_snapshot` every N ticks; 0 disables snapshots.
    snapshot_interval: u64,
}

impl World {
    /// Empty world with no ants.  The builder validates `config` first.
    pub(crate) fn empty(config: ColonyConfig, seed: u64, snapshot_interval: u64) -> Self {
        let grid = config.grid();
        let nest = Nest::new(config.nest_cell(), config.nest_radius);
        Self {
            rng:       SimRng::new(seed),
            field:     ScentField::new(grid, config.max_strength),
            obstacles: ObstacleMask::new(grid, nest),
            food:      FoodStore::new(config.food_pile_radius, config.food_merge_radius),
            nest,
            ants:      Vec::new(),
            rngs:      Vec::new(),
            tick:      Tick::ZERO,
            score:     0,
            snapshot_interval,
            seed,
            config,
        }
    }

    // ── Editing API ───────────────────────────────────────────────────────

    /// Clear field, walls, food, score, and tick counter, then spawn
    /// `population` ants (clamped) around the nest.
    ///
    /// The world RNG is reseeded, so a reset world replays identically.
    pub fn reset(&mut self, population: usize) {
        self.field.clear();
        self.obstacles.clear();
        self.food.clear();
        self.ants.clear();
        self.rngs.clear();
        self.tick = Tick::ZERO;
        self.score = 0;
        self.rng = SimRng::new(self.seed);

        let n = self.config.clamp_population(population);
        self.grow_to(n);
        debug!("world reset: {n} ants, nest at {}", self.nest.cell);
    }

    /// Grow by spawning or shrink by truncating to `target` ants, clamped
    /// to `[min_agents, max_agents]`.  Returns the resulting population.
    pub fn set_population(&mut self, target: usize) -> usize {
        let n = self.config.clamp_population(target);
        let before = self.ants.len();
        if n > before {
            self.grow_to(n);
        } else {
            self.ants.truncate(n);
            self.rngs.truncate(n);
        }
        if n != before {
            debug!("population {before} -> {n}");
        }
        n
    }

    /// Drop `amount` units of food at `cell` (clamped onto the grid),
    /// merging into a nearby pile if there is one.
    pub fn add_food(&mut self, cell: Cell, amount: u32) {
        let cell = self.config.grid().clamp_cell(cell);
        self.food.add_food(cell, amount);
        debug!("food +{amount} at {cell}, {} piles", self.food.len());
    }

    /// Paint (`blocked = true`) or erase walls within `radius` of `cell`.
    /// The nest's no-build zone is always left open.
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool, radius: f32) {
        let changed = self.obstacles.set_region(cell, radius, blocked);
        debug!("obstacle {} at {cell} r={radius}: {changed} cells changed", if blocked { "paint" } else { "erase" });
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    ///
    /// Every ant steps once, in collection order, against the live field;
    /// then the field advances once.
    pub fn tick(&mut self, speed_multiplier: f32) -> TickReport {
        let mut report = TickReport { tick: self.tick, ..TickReport::default() };

        let mut ctx = StepContext::new(
            &self.config,
            &mut self.field,
            &self.obstacles,
            &mut self.food,
            self.nest,
        );

        for (i, (ant, rng)) in self.ants.iter_mut().zip(self.rngs.iter_mut()).enumerate() {
            match ant.step(&mut ctx, speed_multiplier, rng) {
                StepOutcome::Delivered => {
                    report.deliveries += 1;
                    self.score += 1;
                    trace!("{}: ant {i} delivered, score {}", report.tick, self.score);
                }
                StepOutcome::PickedUp => report.pickups += 1,
                StepOutcome::Bounced  => report.bounces += 1,
                StepOutcome::Moved    => {}
            }
        }

        let cfg = &self.config;
        self.field.advance(cfg.evaporation_rate, cfg.diffusion_weight, cfg.scent_floor);
        self.tick = self.tick.next();
        report
    }

    /// Run exactly `n` ticks, calling observer hooks around each.
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, speed_multiplier: f32, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            let report = self.tick(speed_multiplier);
            observer.on_tick_end(&report, self);
            if report.tick.is_multiple_of(self.snapshot_interval) {
                observer.on_snapshot(report.tick, self);
            }
        }
    }

    /// Run `n` ticks, then signal the end of the run to the observer.
    pub fn run<O: WorldObserver>(&mut self, n: u64, speed_multiplier: f32, observer: &mut O) {
        self.run_ticks(n, speed_multiplier, observer);
        observer.on_run_end(self.tick);
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.field.grid()
    }

    #[inline]
    pub fn field(&self) -> &ScentField {
        &self.field
    }

    #[inline]
    pub fn obstacles(&self) -> &ObstacleMask {
        &self.obstacles
    }

    #[inline]
    pub fn food(&self) -> &FoodStore {
        &self.food
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn nest(&self) -> Nest {
        self.nest
    }

    /// Deliveries since the last reset.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Ticks processed since the last reset.
    #[inline]
    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ants currently carrying food.
    pub fn carrying_count(&self) -> usize {
        self.ants.iter().filter(|a| a.is_carrying()).count()
    }

    /// Mutable access to one ant and its RNG, for scripted scenarios.
    ///
    /// Returns `None` if `id` is out of range.
    pub fn ant_mut(&mut self, id: AgentId) -> Option<(&mut Ant, &mut AgentRng)> {
        let i = id.index();
        match (self.ants.get_mut(i), self.rngs.get_mut(i)) {
            (Some(ant), Some(rng)) => Some((ant, rng)),
            _ => None,
        }
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    fn grow_to(&mut self, n: usize) {
        self.ants.reserve(n.saturating_sub(self.ants.len()));
        while self.ants.len() < n {
            // max_agents is validated to fit in u32.
            let id = AgentId(self.ants.len() as u32);
            let ant = self.spawn_ant();
            self.ants.push(ant);
            self.rngs.push(AgentRng::new(self.seed, id));
        }
    }

    /// A searching ant jittered around the nest with a random heading.
    fn spawn_ant(&mut self) -> Ant {
        let centre = self.nest.target();
        let jitter = self.config.spawn_jitter;
        let position = self.config.grid().clamp_point(Point::new(
            centre.x + self.rng.symmetric(jitter),
            centre.y + self.rng.symmetric(jitter),
        ));
        let heading = self.rng.uniform(0.0..TAU);
        Ant::new(position, heading)
    }
}
