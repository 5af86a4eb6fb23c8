//! CSV output backend.
//!
//! Creates `events.csv` and `summaries.csv` in the output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SummaryRow};

pub const EVENT_HEADERS: [&str; 5] = ["time_ms", "wall", "simulation", "lane", "message"];
pub const SUMMARY_HEADERS: [&str; 6] =
    ["time_ms", "simulation", "status", "occupancy", "completed", "rejected"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create both files in `dir` (truncating old ones) and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { events, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            let time_ms = row.time_ms.to_string();
            self.events.write_record([
                time_ms.as_str(),
                row.wall.as_str(),
                row.simulation.as_str(),
                row.lane.as_str(),
                row.message.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record([
            row.time_ms.to_string(),
            row.simulation.clone(),
            row.status.clone(),
            row.occupancy.to_string(),
            row.completed.to_string(),
            row.rejected.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
