//! The ant and its per-tick step.

use ant_core::{AgentRng, Cell, Point, normalize_angle};

use crate::motion::{Motion, resolve_move};
use crate::sense::sense;
use crate::steer::{Steering, homing_turn};
use crate::{AntState, StepContext};

/// What happened to an ant during one step.
///
/// Interactions take precedence: an ant that bounced and delivered in the
/// same tick reports `Delivered`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Moved to the candidate position.
    Moved,
    /// Hit the grid edge or an obstacle; only the heading changed.
    Bounced,
    /// Took one unit of food and turned for home.
    PickedUp,
    /// Dropped its food inside the nest radius.  The world scores it.
    Delivered,
}

/// A single ant.
///
/// `position` is continuous, in cell units; `heading` is in radians,
/// normalised into `[0, 2π)` after every step.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ant {
    pub position: Point,
    pub heading:  f32,
    pub state:    AntState,
}

impl Ant {
    /// A searching ant.
    pub fn new(position: Point, heading: f32) -> Self {
        Self { position, heading: normalize_angle(heading), state: AntState::Searching }
    }

    /// The cell the ant stands on.
    #[inline]
    pub fn cell(&self) -> Cell {
        self.position.cell()
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.state.is_carrying()
    }

    /// Advance this ant by one tick.  See the crate docs for the step order.
    ///
    /// A negative or non-finite `speed_multiplier` is treated as zero.
    pub fn step(
        &mut self,
        ctx:              &mut StepContext<'_>,
        speed_multiplier: f32,
        rng:              &mut AgentRng,
    ) -> StepOutcome {
        let config = ctx.config;

        // ① + ② sense and steer.
        let turn = match self.state {
            AntState::Searching => {
                let reading = sense(ctx.field, ctx.obstacles, config, self.position, self.heading);
                Steering::decide(&reading, config.scent_threshold).turn(config, rng)
            }
            AntState::Returning => homing_turn(
                self.position,
                self.heading,
                ctx.nest.target(),
                config.max_turn_per_tick,
            ),
        };
        self.heading = normalize_angle(self.heading + turn);

        // ③ + ④ move or bounce.
        let multiplier = if speed_multiplier.is_finite() { speed_multiplier.max(0.0) } else { 0.0 };
        let motion = resolve_move(
            self.position,
            self.heading,
            config.base_step * multiplier,
            ctx.field.grid(),
            ctx.obstacles,
            config.collision_jitter,
            rng,
        );
        let movement = match motion {
            Motion::Moved(p) => {
                self.position = p;
                StepOutcome::Moved
            }
            Motion::Bounced { heading } => {
                self.heading = heading;
                StepOutcome::Bounced
            }
        };

        let cell = self.cell();

        // ⑤ deposit.
        if self.state.is_carrying() {
            ctx.field.deposit(cell, config.food_deposit_rate);
        }

        // ⑥ interact.
        match self.state {
            AntState::Searching if ctx.food.try_pickup(cell) => {
                self.state = AntState::Returning;
                self.heading = normalize_angle(self.position.bearing_to(ctx.nest.target()));
                StepOutcome::PickedUp
            }
            AntState::Returning if ctx.nest.contains(cell) => {
                self.state = AntState::Searching;
                StepOutcome::Delivered
            }
            _ => movement,
        }
    }
}
