//! Picks the output backend for a run.

use std::fmt::Display;
use std::path::Path;

use sync_core::{SimClock, Summary, TimerLane};
use sync_output::{CsvWriter, OutputError, OutputResult, SimOutputObserver, SqliteWriter};
use sync_sim::SimObserver;

/// No output, CSV files, or an SQLite database.
pub enum Output {
    Discard,
    Csv(SimOutputObserver<CsvWriter>),
    Sqlite(SimOutputObserver<SqliteWriter>),
}

impl Output {
    pub fn open(dir: Option<&Path>, sqlite: bool, simulation: &str) -> OutputResult<Self> {
        Ok(match dir {
            None => Output::Discard,
            Some(dir) if sqlite => Output::Sqlite(SimOutputObserver::new(SqliteWriter::new(dir)?, simulation)),
            Some(dir) => Output::Csv(SimOutputObserver::new(CsvWriter::new(dir)?, simulation)),
        })
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        match self {
            Output::Discard   => None,
            Output::Csv(o)    => o.take_error(),
            Output::Sqlite(o) => o.take_error(),
        }
    }
}

impl<E: Display> SimObserver<E> for Output {
    fn on_timer(&mut self, clock: &SimClock, lane: TimerLane, events: &[E]) {
        match self {
            Output::Discard   => {}
            Output::Csv(o)    => o.on_timer(clock, lane, events),
            Output::Sqlite(o) => o.on_timer(clock, lane, events),
        }
    }

    fn on_summary(&mut self, clock: &SimClock, summary: &Summary) {
        match self {
            Output::Discard   => {}
            Output::Csv(o)    => SimObserver::<E>::on_summary(o, clock, summary),
            Output::Sqlite(o) => SimObserver::<E>::on_summary(o, clock, summary),
        }
    }

    fn on_sim_end(&mut self, clock: &SimClock) {
        match self {
            Output::Discard   => {}
            Output::Csv(o)    => SimObserver::<E>::on_sim_end(o, clock),
            Output::Sqlite(o) => SimObserver::<E>::on_sim_end(o, clock),
        }
    }
}
