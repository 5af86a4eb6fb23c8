//! `sync-output` — writers that record what a simulation run did.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                   |
//! |-----------|---------|---------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `summaries.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `sync_sim::SimObserver` for any displayable event type.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sync_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, "barber");
//! sim.run_for(60_000, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
