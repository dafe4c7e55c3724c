//! The `OutputWriter` trait implemented by trace backends.

use crate::{AntSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for tick summaries and ant snapshots.
///
/// Errors never interrupt the run: the observer stores the first one for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of ant snapshots taken at one tick.
    fn write_snapshots(&mut self, rows: &[AntSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
