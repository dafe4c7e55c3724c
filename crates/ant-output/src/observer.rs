//! `SimOutputObserver<W>`: bridges `WorldObserver` to an `OutputWriter`.

use ant_core::Tick;
use ant_sim::{TickReport, World, WorldObserver};

use crate::row::{AntSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes one summary row per tick and one
/// snapshot batch per snapshot interval to any [`OutputWriter`].
///
/// `WorldObserver` hooks return nothing, so write errors are kept here.
/// Check [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error of the run, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, world: &World) {
        let row = TickSummaryRow {
            tick:           report.tick.0,
            score:          world.score(),
            pickups:        report.pickups,
            deliveries:     report.deliveries,
            bounces:        report.bounces,
            carrying:       world.carrying_count() as u64,
            field_total:    world.field().total(),
            food_remaining: world.food().total_amount(),
            field_peak:     world.field().max_value(),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        let rows: Vec<AntSnapshotRow> = world
            .ants()
            .iter()
            .enumerate()
            .map(|(i, ant)| AntSnapshotRow {
                tick:     tick.0,
                ant_id:   i as u32,
                x:        ant.position.x,
                y:        ant.position.y,
                heading:  ant.heading,
                carrying: ant.is_carrying(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
