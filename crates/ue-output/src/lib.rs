//! `ue-output` — run output writers for the urban ecosystem engine.
//!
//! | Type                  | Role                                               |
//! |-----------------------|----------------------------------------------------|
//! | [`OutputWriter`]      | Backend trait: summary rows, snapshot rows, flush  |
//! | [`CsvWriter`]         | `tick_summaries.csv`, `agent_snapshots.csv`        |
//! | [`SimOutputObserver`] | Implements `ue_sim::SimObserver` over a writer     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ue_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
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
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
