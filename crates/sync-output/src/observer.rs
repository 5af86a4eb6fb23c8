//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use std::fmt::Display;

use sync_core::{SimClock, Summary, TimerLane};
use sync_sim::SimObserver;

use crate::row::{EventRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every event and every post-step summary
/// through any [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is kept and later
/// ones are dropped.  Check [`take_error`][Self::take_error] once the run
/// is over.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    simulation: String,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// `simulation` names the model in every row (usually `Simulation::NAME`).
    pub fn new(writer: W, simulation: impl Into<String>) -> Self {
        Self { writer, simulation: simulation.into(), last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter, E: Display> SimObserver<E> for SimOutputObserver<W> {
    fn on_timer(&mut self, clock: &SimClock, lane: TimerLane, events: &[E]) {
        if events.is_empty() {
            return;
        }
        let wall = clock.wall_time().to_string();
        let rows: Vec<EventRow> = events
            .iter()
            .map(|event| EventRow {
                time_ms:    clock.now.as_millis(),
                wall:       wall.clone(),
                simulation: self.simulation.clone(),
                lane:       lane.as_str().to_owned(),
                message:    event.to_string(),
            })
            .collect();
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn on_summary(&mut self, clock: &SimClock, summary: &Summary) {
        let row = SummaryRow {
            time_ms:    clock.now.as_millis(),
            simulation: self.simulation.clone(),
            status:     summary.status.to_owned(),
            occupancy:  summary.occupancy,
            completed:  summary.completed,
            rejected:   summary.rejected,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
