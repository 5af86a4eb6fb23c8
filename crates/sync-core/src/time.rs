//! Simulated time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `SimTime`.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + now_ms / 1000
//!
//! Timer periods come from [`Speed`], so every deadline is an exact integer
//! and two timers due at the same instant compare equal.

use std::fmt;
use std::str::FromStr;

use crate::{SyncError, SyncResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Milliseconds since the runner was created.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1000, self.0 % 1000)
    }
}

// ── WallTime ──────────────────────────────────────────────────────────────────

/// Time of day used to stamp log entries.  The clock origin decides the zone.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallTime {
    pub hour:   u8,
    pub minute: u8,
    pub second: u8,
}

impl WallTime {
    /// Time of day for a Unix timestamp, without a datetime library.
    pub fn from_unix_secs(secs: i64) -> Self {
        let of_day = secs.rem_euclid(86_400) as u32;
        Self {
            hour:   (of_day / 3_600) as u8,
            minute: ((of_day % 3_600) / 60) as u8,
            second: (of_day % 60) as u8,
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between simulated milliseconds and wall-clock time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of `SimTime::ZERO`.
    pub start_unix_secs: i64,
    /// The current instant, moved forward by the runner.
    pub now: SimTime,
}

impl SimClock {
    pub fn new(start_unix_secs: i64) -> Self {
        Self { start_unix_secs, now: SimTime::ZERO }
    }

    /// Move the clock to `at`.  Moving backwards is a no-op.
    #[inline]
    pub fn advance_to(&mut self, at: SimTime) {
        if at > self.now {
            self.now = at;
        }
    }

    /// Unix timestamp corresponding to `now`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.start_unix_secs + (self.now.0 / 1000) as i64
    }

    /// Time of day corresponding to `now`.
    pub fn wall_time(&self) -> WallTime {
        WallTime::from_unix_secs(self.current_unix_secs())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.now, self.wall_time())
    }
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Tick period presets offered by the settings panel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    /// 3000 ms per tick.
    Slow,
    /// 2000 ms per tick.
    #[default]
    Normal,
    /// 1000 ms per tick.
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

    /// Tick period in milliseconds.
    #[inline]
    pub fn millis(self) -> u64 {
        match self {
            Speed::Slow   => 3_000,
            Speed::Normal => 2_000,
            Speed::Fast   => 1_000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow   => "slow",
            Speed::Normal => "normal",
            Speed::Fast   => "fast",
        }
    }
}

impl TryFrom<u64> for Speed {
    type Error = SyncError;

    fn try_from(ms: u64) -> SyncResult<Speed> {
        Speed::ALL
            .into_iter()
            .find(|s| s.millis() == ms)
            .ok_or_else(|| SyncError::InvalidValue { what: "speed", value: ms.to_string() })
    }
}

impl FromStr for Speed {
    type Err = SyncError;

    /// Accepts a preset name (`slow`, `normal`, `fast`) or its period in
    /// milliseconds (`3000`, `2000`, `1000`).
    fn from_str(s: &str) -> SyncResult<Speed> {
        let s = s.trim();
        if let Some(speed) = Speed::ALL.into_iter().find(|v| v.as_str().eq_ignore_ascii_case(s)) {
            return Ok(speed);
        }
        s.parse::<u64>()
            .map_err(|_| SyncError::InvalidValue { what: "speed", value: s.to_owned() })
            .and_then(Speed::try_from)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Runner configuration shared by both simulators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Unix timestamp of `SimTime::ZERO`, used for log stamps.
    pub start_unix_secs: i64,

    /// Tick period preset.
    pub speed: Speed,

    /// RNG seed.  The same seed and the same control sequence always produce
    /// identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { start_unix_secs: 0, speed: Speed::Normal, seed: 42 }
    }
}
