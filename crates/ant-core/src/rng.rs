//! Seeded random sources.
//!
//! Every draw in the engine comes from one of two generators, both derived
//! from the world seed:
//!
//! - [`AgentRng`], one per ant, seeded `world_seed ^ id * GOLDEN`.  Steering
//!   wander, tiebreaks, and bounce jitter use it, so one ant's draws never
//!   shift another's, and appending or truncating ants leaves the remaining
//!   streams intact.
//! - [`SimRng`], one per world, for spawn offsets and spawn headings.
//!
//! A fixed seed therefore pins an entire run.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 2^64 / φ, spreads consecutive ids across the seed space.
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uniform in `[-half_width, half_width]`; zero when the width is not a
/// positive finite number, so disabled jitter draws nothing.
#[inline]
fn symmetric(rng: &mut SmallRng, half_width: f32) -> f32 {
    if half_width > 0.0 && half_width.is_finite() {
        rng.gen_range(-half_width..=half_width)
    } else {
        0.0
    }
}

/// An ant's own generator.
///
/// Kept in a `Vec<AgentRng>` beside the ants so a step can borrow both.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(world_seed: u64, agent: AgentId) -> Self {
        let seed = world_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Turn or offset in `[-half_width, half_width]`.
    #[inline]
    pub fn symmetric(&mut self, half_width: f32) -> f32 {
        symmetric(&mut self.0, half_width)
    }
}

/// The world's generator, for spawning.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform in the half-open `range`; `range.start` if it is empty.
    #[inline]
    pub fn uniform(&mut self, range: Range<f32>) -> f32 {
        if range.start < range.end {
            self.0.gen_range(range)
        } else {
            range.start
        }
    }

    #[inline]
    pub fn symmetric(&mut self, half_width: f32) -> f32 {
        symmetric(&mut self.0, half_width)
    }
}
