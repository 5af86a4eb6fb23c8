//! `TimerQueue`: pending timer deadlines keyed by simulated time.
//!
//! Every armed lane has exactly one entry: its next deadline.  When a lane
//! fires the runner pushes it again one period later, which turns one-shot
//! entries into a periodic interval.  Lanes due at the same instant fire in
//! the order they were pushed.

use std::collections::BTreeMap;

use sync_core::{SimTime, TimerLane};

#[derive(Default, Debug)]
pub struct TimerQueue {
    inner: BTreeMap<SimTime, Vec<TimerLane>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `lane` to fire at `at`.
    pub fn push(&mut self, at: SimTime, lane: TimerLane) {
        self.inner.entry(at).or_default().push(lane);
        self.total += 1;
    }

    /// Remove and return the earliest deadline and every lane due then, if
    /// that deadline is at or before `limit`.
    pub fn pop_due(&mut self, limit: SimTime) -> Option<(SimTime, Vec<TimerLane>)> {
        let at = self.next_deadline().filter(|&at| at <= limit)?;
        let lanes = self.inner.remove(&at)?;
        self.total -= lanes.len();
        Some((at, lanes))
    }

    /// The earliest pending deadline, or `None` if nothing is armed.
    pub fn next_deadline(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Drop every pending deadline.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
