//! Wall-clock frame pacing.
//!
//! A renderer calls [`FrameDriver::advance`] once per frame with the time
//! since the previous frame.  The driver converts that into a whole number
//! of ticks, runs them back to back, and returns, so every frame is drawn
//! against a world that is not mid-tick.

use std::time::Duration;

use ant_core::ColonyConfig;
use log::trace;

use crate::{World, WorldObserver};

// ── TickPacer ─────────────────────────────────────────────────────────────────

/// Converts elapsed frame time into a tick count.
///
/// Fractional ticks carry over between frames.  A running pacer always
/// yields at least one tick per frame, and never more than
/// `max_ticks_per_frame`; backlog beyond the cap is dropped rather than
/// replayed on later frames.
#[derive(Clone, Debug)]
pub struct TickPacer {
    ticks_per_second:    f64,
    max_ticks_per_frame: u32,
    /// Unspent elapsed time, in ticks.
    carry:               f64,
}

impl TickPacer {
    pub fn new(ticks_per_second: f32, max_ticks_per_frame: u32) -> Self {
        Self {
            ticks_per_second:    f64::from(ticks_per_second.max(f32::MIN_POSITIVE)),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            carry:               0.0,
        }
    }

    pub fn from_config(config: &ColonyConfig) -> Self {
        Self::new(config.ticks_per_second, config.max_ticks_per_frame)
    }

    /// Ticks to run for a frame that took `elapsed`.
    ///
    /// A paused frame returns 0 and discards any carried fraction.
    pub fn ticks_for(&mut self, elapsed: Duration, running: bool) -> u32 {
        if !running {
            self.carry = 0.0;
            return 0;
        }

        self.carry += elapsed.as_secs_f64() * self.ticks_per_second;
        let due = self.carry.floor();

        if due < 1.0 {
            // Forced tick: the frame consumes whatever fraction it had.
            self.carry = 0.0;
            return 1;
        }
        if due >= f64::from(self.max_ticks_per_frame) {
            self.carry = 0.0;
            return self.max_ticks_per_frame;
        }
        self.carry -= due;
        due as u32
    }
}

// ── FrameDriver ───────────────────────────────────────────────────────────────

/// Pause state, speed multiplier, and a [`TickPacer`] in one place.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    pacer:     TickPacer,
    paused:    bool,
    speed:     f32,
    max_speed: f32,
}

impl FrameDriver {
    /// A running driver at speed 1.
    pub fn new(config: &ColonyConfig) -> Self {
        Self {
            pacer:     TickPacer::from_config(config),
            paused:    false,
            speed:     1.0_f32.min(config.max_speed_multiplier),
            max_speed: config.max_speed_multiplier,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip pause state; returns `true` if now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the speed multiplier, clamped to `[0, max_speed_multiplier]`.
    /// NaN is treated as zero.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        self.speed = if speed.is_nan() { 0.0 } else { speed.clamp(0.0, self.max_speed) };
        self.speed
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Run this frame's ticks on `world`.  Returns how many ran.
    pub fn advance<O: WorldObserver>(
        &mut self,
        world:    &mut World,
        elapsed:  Duration,
        observer: &mut O,
    ) -> u32 {
        let n = self.pacer.ticks_for(elapsed, !self.paused);
        if n > 0 {
            world.run_ticks(u64::from(n), self.speed, observer);
            trace!("frame {:?}: {n} ticks, now {}", elapsed, world.tick_count());
        }
        n
    }
}
