//! Sensing cones.
//!
//! A cone along direction `d` covers, for each distance `o` in
//! `1..=offset`, the cells at `position + o * d + s * d⊥` for every lateral
//! step `s` in `-spread..=spread`.  Obstacle and off-grid cells are dropped
//! before averaging, so a fully blocked cone reads as zero.

use ant_core::{Cell, ColonyConfig, Point};
use ant_grid::{ObstacleMask, ScentField};

/// Cone averages in the three sensing directions.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SensorReading {
    pub forward: f32,
    /// `heading + sensor_angle`.
    pub left:    f32,
    /// `heading - sensor_angle`.
    pub right:   f32,
}

impl SensorReading {
    #[inline]
    pub fn new(forward: f32, left: f32, right: f32) -> Self {
        Self { forward, left, right }
    }

    /// The largest of the three readings.
    #[inline]
    pub fn strongest(&self) -> f32 {
        self.forward.max(self.left).max(self.right)
    }
}

/// Cells covered by one cone.  May repeat a cell when two samples floor to
/// the same coordinates; repeats weight the average accordingly.
pub fn cone_cells(
    position:  Point,
    direction: f32,
    offset:    u32,
    spread:    u32,
) -> impl Iterator<Item = Cell> {
    let (sin, cos) = direction.sin_cos();
    let spread = spread as i32;
    (1..=offset).flat_map(move |o| {
        let o = o as f32;
        (-spread..=spread).map(move |s| {
            let s = s as f32;
            Point::new(
                position.x + o * cos - s * sin,
                position.y + o * sin + s * cos,
            )
            .cell()
        })
    })
}

/// Average field strength over one cone, skipping blocked and off-grid cells.
pub fn sample_cone(
    field:     &ScentField,
    obstacles: &ObstacleMask,
    position:  Point,
    direction: f32,
    offset:    u32,
    spread:    u32,
) -> f32 {
    field.sample_average(
        cone_cells(position, direction, offset, spread).filter(|&c| obstacles.is_open(c)),
    )
}

/// Read all three cones for an ant at `position` facing `heading`.
pub fn sense(
    field:     &ScentField,
    obstacles: &ObstacleMask,
    config:    &ColonyConfig,
    position:  Point,
    heading:   f32,
) -> SensorReading {
    let read_cone = |direction: f32| {
        sample_cone(
            field,
            obstacles,
            position,
            direction,
            config.sensor_offset,
            config.sensor_spread,
        )
    };
    SensorReading {
        forward: read_cone(heading),
        left:    read_cone(heading + config.sensor_angle),
        right:   read_cone(heading - config.sensor_angle),
    }
}
