//! Candidate moves and collision response.
//!
//! A move that would leave the grid or enter an obstacle is not clipped or
//! slid: the ant only turns and tries again next tick.

use std::f32::consts::{FRAC_PI_2, PI};

use ant_core::{AgentRng, Grid, Point, normalize_angle};
use ant_grid::ObstacleMask;

/// Result of resolving one candidate move.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Motion {
    /// The candidate was free; the ant now stands here.
    Moved(Point),
    /// At least one reflection happened.  The position is unchanged and
    /// this is the new heading.
    Bounced { heading: f32 },
}

/// Try to move `distance` cells from `position` along `heading`.
///
/// Checks, in order, each applied to the heading produced by the previous:
///
/// 1. candidate `x` outside `[0, width)`  → `heading = π - heading`
/// 2. candidate `y` outside `[0, height)` → `heading = -heading`
/// 3. candidate (clamped into the grid) on an obstacle →
///    `heading += π/2 ± jitter`
///
/// An ant already standing on a blocked cell (a wall painted over it) is
/// not pinned by check 3 and may walk out.
pub fn resolve_move(
    position:  Point,
    heading:   f32,
    distance:  f32,
    grid:      Grid,
    obstacles: &ObstacleMask,
    jitter:    f32,
    rng:       &mut AgentRng,
) -> Motion {
    let candidate = position.advance(heading, distance);
    let mut new_heading = heading;
    let mut bounced = false;

    if !grid.contains_x(candidate.x) {
        new_heading = PI - new_heading;
        bounced = true;
    }
    if !grid.contains_y(candidate.y) {
        new_heading = -new_heading;
        bounced = true;
    }

    let target = grid.clamp_point(candidate).cell();
    if obstacles.is_blocked(target) && !obstacles.is_blocked(position.cell()) {
        new_heading += FRAC_PI_2 + rng.symmetric(jitter);
        bounced = true;
    }

    if bounced {
        Motion::Bounced { heading: normalize_angle(new_heading) }
    } else {
        Motion::Moved(candidate)
    }
}
