//! The `Simulation` trait: the seam between a state machine and the runner.

use std::fmt;

use crate::{EventLog, SimClock, SimRng, Speed};

/// A periodic timer a simulation asks the runner to drive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerLane {
    /// The main transition tick, one per `speed` period.
    Step,
    /// Customer arrival trials, one per `speed × 1.5`.
    Arrival,
}

impl TimerLane {
    /// Period of this lane at the given speed, in milliseconds.
    #[inline]
    pub fn period_ms(self, speed: Speed) -> u64 {
        match self {
            TimerLane::Step    => speed.millis(),
            TimerLane::Arrival => speed.millis() * 3 / 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerLane::Step    => "step",
            TimerLane::Arrival => "arrival",
        }
    }
}

impl fmt::Display for TimerLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline numbers for one simulator at one instant.
///
/// | Field       | Barber             | Smokers              |
/// |-------------|--------------------|----------------------|
/// | `status`    | barber status      | agent status         |
/// | `occupancy` | customers waiting  | ingredients on table |
/// | `completed` | customers served   | cigarettes smoked    |
/// | `rejected`  | customers turned away | always 0          |
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub status:    &'static str,
    pub occupancy: u64,
    pub completed: u64,
    pub rejected:  u64,
}

/// A timer-driven state machine.
///
/// The runner in `sync-sim` owns the clock, the RNG and the pending timers;
/// implementors only decide what happens when one of their lanes fires.
/// Each call is a complete transition: the runner never interleaves two.
pub trait Simulation {
    /// What a transition reports back, one value per log line.
    type Event: fmt::Display + Clone;

    /// Short name used in output rows and tracing spans.
    const NAME: &'static str;

    /// Timers to arm when the simulation starts, in firing-priority order.
    fn lanes(&self) -> &'static [TimerLane];

    /// Apply the transition for `lane` at `clock.now`.
    fn on_timer(
        &mut self,
        lane:  TimerLane,
        clock: &SimClock,
        rng:   &mut SimRng,
    ) -> Vec<Self::Event>;

    /// Return every entity to its initial state and clear the log.
    fn reset(&mut self);

    fn log(&self) -> &EventLog;

    fn summary(&self) -> Summary;
}
