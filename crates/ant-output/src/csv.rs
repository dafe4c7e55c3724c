//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `tick_summaries.csv`
//! - `ant_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AntSnapshotRow, OutputResult, TickSummaryRow};

pub const SUMMARY_HEADER: [&str; 9] = [
    "tick", "score", "pickups", "deliveries", "bounces", "carrying", "field_total", "food_remaining",
    "field_peak",
];
pub const SNAPSHOT_HEADER: [&str; 6] = ["tick", "ant_id", "x", "y", "heading", "carrying"];

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (truncating) both files in `dir`, which must exist, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("ant_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AntSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.ant_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.4}", row.heading),
                (row.carrying as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.score.to_string(),
            row.pickups.to_string(),
            row.deliveries.to_string(),
            row.bounces.to_string(),
            row.carrying.to_string(),
            format!("{:.3}", row.field_total),
            row.food_remaining.to_string(),
            format!("{:.3}", row.field_peak),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
