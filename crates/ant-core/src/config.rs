//! Colony tunables.
//!
//! Every constant the engine reads lives in [`ColonyConfig`].  The defaults
//! produce stable trail formation on a 200 x 150 grid; applications override
//! individual fields (the headless demo loads a JSON file with the `serde`
//! feature, where missing fields fall back to the defaults).

use std::f32::consts::FRAC_PI_4;

use crate::{Cell, CoreError, CoreResult, Grid};

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColonyConfig {
    // ── Grid ──────────────────────────────────────────────────────────────
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Pixels per cell.  Read only by renderers.
    pub cell_size_px: u32,

    // ── Population ────────────────────────────────────────────────────────
    pub min_agents: usize,
    pub max_agents: usize,
    pub default_population: usize,
    /// Half-width of the uniform spawn offset around the nest, per axis.
    pub spawn_jitter: f32,

    // ── Scent field ───────────────────────────────────────────────────────
    /// Upper bound of every field cell.
    pub max_strength: f32,
    /// Fraction of strength lost per tick, in `(0, 1]`.
    pub evaporation_rate: f32,
    /// Blend between a cell and its 8-neighbour mean, in `[0, 1]`.
    /// Zero disables spatial spreading.
    pub diffusion_weight: f32,
    /// Values below this snap to zero after an advance.
    pub scent_floor: f32,
    /// Amount a carrying ant lays on its cell each tick.
    pub food_deposit_rate: f32,

    // ── Sensing & steering ────────────────────────────────────────────────
    /// Angle between the forward sensor and each side sensor (radians).
    pub sensor_angle: f32,
    /// How many cells ahead each sensor reaches.
    pub sensor_offset: u32,
    /// Lateral half-width of each sensor, in cells.
    pub sensor_spread: u32,
    /// Strongest reading below which a searching ant wanders.
    pub scent_threshold: f32,
    /// Largest heading change per tick (radians).
    pub max_turn_per_tick: f32,
    /// Cells moved per tick at speed multiplier 1.
    pub base_step: f32,
    /// Half-width of the random perturbation added to an obstacle bounce.
    pub collision_jitter: f32,

    // ── Nest & food ───────────────────────────────────────────────────────
    /// Delivery radius, and the no-build zone for obstacles.
    pub nest_radius: f32,
    /// Reach of a pile when an ant tries to pick up from it.
    pub food_pile_radius: f32,
    /// New food within `food_merge_radius + 1` cells of a pile joins it.
    pub food_merge_radius: f32,

    // ── Pacing ────────────────────────────────────────────────────────────
    pub ticks_per_second: f32,
    /// Upper bound on ticks run for one rendered frame.
    pub max_ticks_per_frame: u32,
    pub max_speed_multiplier: f32,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            width:                200,
            height:               150,
            cell_size_px:         4,

            min_agents:           1,
            max_agents:           2_000,
            default_population:   300,
            spawn_jitter:         2.0,

            max_strength:         100.0,
            evaporation_rate:     0.01,
            diffusion_weight:     0.0,
            scent_floor:          0.001,
            food_deposit_rate:    4.0,

            sensor_angle:         FRAC_PI_4,
            sensor_offset:        3,
            sensor_spread:        1,
            scent_threshold:      0.05,
            max_turn_per_tick:    0.4,
            base_step:            1.0,
            collision_jitter:     0.3,

            nest_radius:          5.0,
            food_pile_radius:     2.0,
            food_merge_radius:    3.0,

            ticks_per_second:     60.0,
            max_ticks_per_frame:  8,
            max_speed_multiplier: 10.0,
        }
    }
}

impl ColonyConfig {
    /// The grid described by `width` x `height`.
    #[inline]
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    /// The nest cell: the grid centre.
    #[inline]
    pub fn nest_cell(&self) -> Cell {
        self.grid().center()
    }

    /// Clamp a requested population into `[min_agents, max_agents]`.
    #[inline]
    pub fn clamp_population(&self, requested: usize) -> usize {
        requested.clamp(self.min_agents, self.max_agents)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.min_agents == 0 || self.min_agents > self.max_agents {
            return Err(CoreError::Config(format!(
                "population bounds must satisfy 1 <= min <= max, got [{}, {}]",
                self.min_agents, self.max_agents
            )));
        }
        if u32::try_from(self.max_agents).is_err() {
            return Err(CoreError::Config(format!(
                "max_agents {} exceeds the agent id space",
                self.max_agents
            )));
        }

        check_range("evaporation_rate", self.evaporation_rate, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        check_range("diffusion_weight", self.diffusion_weight, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;
        check_range("max_strength", self.max_strength, "(0, inf)", |v| v > 0.0)?;
        check_range("scent_floor", self.scent_floor, "[0, max_strength)", |v| {
            v >= 0.0 && v < self.max_strength
        })?;
        check_range("food_deposit_rate", self.food_deposit_rate, "[0, inf)", |v| v >= 0.0)?;
        check_range("scent_threshold", self.scent_threshold, "[0, inf)", |v| v >= 0.0)?;
        check_range("base_step", self.base_step, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        check_range("max_turn_per_tick", self.max_turn_per_tick, "(0, pi]", |v| {
            v > 0.0 && v <= std::f32::consts::PI
        })?;
        check_range("sensor_angle", self.sensor_angle, "(0, pi)", |v| {
            v > 0.0 && v < std::f32::consts::PI
        })?;
        check_range("collision_jitter", self.collision_jitter, "[0, pi/2)", |v| {
            (0.0..std::f32::consts::FRAC_PI_2).contains(&v)
        })?;
        check_range("spawn_jitter", self.spawn_jitter, "[0, inf)", |v| v >= 0.0)?;
        check_range("nest_radius", self.nest_radius, "[0, inf)", |v| v >= 0.0)?;
        check_range("food_pile_radius", self.food_pile_radius, "[0, inf)", |v| v >= 0.0)?;
        check_range("food_merge_radius", self.food_merge_radius, "[0, inf)", |v| v >= 0.0)?;
        check_range("ticks_per_second", self.ticks_per_second, "(0, inf)", |v| v > 0.0)?;
        check_range("max_speed_multiplier", self.max_speed_multiplier, "(0, inf)", |v| v > 0.0)?;

        if self.sensor_offset == 0 {
            return Err(CoreError::Config("sensor_offset must be at least 1".into()));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(CoreError::Config("max_ticks_per_frame must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_range(
    what:  &'static str,
    value: f32,
    range: &'static str,
    ok:    impl Fn(f32) -> bool,
) -> CoreResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { what, range, value: value as f64 })
    }
}
