//! Turn decisions.

use ant_core::{AgentRng, ColonyConfig, Point, angle_diff};

use crate::SensorReading;

/// What a searching ant decided to do with its sensor readings.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Steering {
    /// No reading reached the threshold: random turn in `±max_turn / 2`.
    Wander,
    /// Forward is the (tied-or-greater) strongest: keep heading.
    Hold,
    /// Left is strictly stronger than right: turn `+sensor_angle`.
    Left,
    /// Right is strictly stronger than left: turn `-sensor_angle`.
    Right,
    /// Left and right tie above forward: random turn in `±max_turn`.
    Tiebreak,
}

impl Steering {
    /// Classify a reading.  Pure; the randomness lives in [`Steering::turn`].
    pub fn decide(reading: &SensorReading, threshold: f32) -> Steering {
        let SensorReading { forward, left, right } = *reading;
        if reading.strongest() < threshold {
            Steering::Wander
        } else if forward >= left && forward >= right {
            Steering::Hold
        } else if left > right {
            Steering::Left
        } else if right > left {
            Steering::Right
        } else {
            Steering::Tiebreak
        }
    }

    /// The heading change (radians) this decision produces.
    pub fn turn(self, config: &ColonyConfig, rng: &mut AgentRng) -> f32 {
        match self {
            Steering::Wander   => rng.symmetric(config.max_turn_per_tick * 0.5),
            Steering::Hold     => 0.0,
            Steering::Left     => config.sensor_angle,
            Steering::Right    => -config.sensor_angle,
            Steering::Tiebreak => rng.symmetric(config.max_turn_per_tick),
        }
    }
}

/// Heading change for a returning ant: the signed difference to the bearing
/// of `target`, clamped to `±max_turn`.
#[inline]
pub fn homing_turn(position: Point, heading: f32, target: Point, max_turn: f32) -> f32 {
    angle_diff(position.bearing_to(target), heading).clamp(-max_turn, max_turn)
}
