//! `ant-output`: run traces for the ant colony engine.
//!
//! | Backend | Files created                                 |
//! |---------|-----------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `ant_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ant_sim::WorldObserver`.  The
//! files are a trace of what happened, not a state that can be reloaded.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ant_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! world.run(5_000, 1.0, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AntSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
