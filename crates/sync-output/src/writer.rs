//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, SummaryRow};

/// Implemented by the CSV and SQLite writers.
///
/// Errors never reach the runner: the observer stores them for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of events from one timer firing.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close the underlying files.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
