//! World observer trait for progress reporting and data collection.

use ant_core::Tick;

use crate::{TickReport, World};

/// Callbacks invoked by [`World::run_ticks`][crate::World::run_ticks] and
/// [`World::run`][crate::World::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct ScorePrinter { interval: u64 }
///
/// impl WorldObserver for ScorePrinter {
///     fn on_tick_end(&mut self, report: &TickReport, world: &World) {
///         if report.tick.is_multiple_of(self.interval) {
///             println!("{}: score {}", report.tick, world.score());
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called before any ant steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the field advance; `world` is already at the next tick.
    fn on_tick_end(&mut self, _report: &TickReport, _world: &World) {}

    /// Called every `snapshot_interval` ticks (see
    /// [`WorldBuilder::snapshot_interval`][crate::WorldBuilder::snapshot_interval]).
    fn on_snapshot(&mut self, _tick: Tick, _world: &World) {}

    /// Called once when [`World::run`][crate::World::run] finishes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
