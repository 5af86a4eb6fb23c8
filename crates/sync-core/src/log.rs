//! Bounded event log shown next to each simulator.
//!
//! Newest entries come first.  Once [`LOG_CAPACITY`] entries are held, each
//! push silently drops the oldest one.  The state machines only ever write
//! to the log; nothing reads it back to make a decision.

use std::collections::VecDeque;
use std::fmt;

use crate::{SimClock, SimTime, WallTime};

/// Maximum number of entries retained.
pub const LOG_CAPACITY: usize = 15;

/// One timestamped, human-readable log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub at:      SimTime,
    pub wall:    WallTime,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.wall, self.message)
    }
}

#[derive(Clone, Debug)]
pub struct EventLog {
    entries:  VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record `message` stamped with the clock's current instant.
    pub fn push(&mut self, clock: &SimClock, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(LogEntry {
            at:      clock.now,
            wall:    clock.wall_time(),
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
