//! Barber-specific settings.

use std::ops::RangeInclusive;

use sync_core::{SyncError, SyncResult};

/// Allowed waiting-chair counts.
pub const CHAIRS: RangeInclusive<u8> = 1..=10;

/// Allowed arrival-rate percentages; values must also be multiples of
/// [`ARRIVAL_RATE_STEP`].
pub const ARRIVAL_RATE: RangeInclusive<u8> = 10..=100;
pub const ARRIVAL_RATE_STEP: u8 = 10;

/// Chair capacity and arrival probability.
///
/// Fields are private so a constructed config is always in range; use
/// [`BarberConfig::new`] or the `with_*` setters.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BarberConfig {
    chairs:       u8,
    arrival_rate: u8,
}

impl BarberConfig {
    pub fn new(chairs: u8, arrival_rate: u8) -> SyncResult<Self> {
        Ok(Self {
            chairs:       check_chairs(chairs)?,
            arrival_rate: check_arrival_rate(arrival_rate)?,
        })
    }

    pub fn with_chairs(self, chairs: u8) -> SyncResult<Self> {
        Ok(Self { chairs: check_chairs(chairs)?, ..self })
    }

    pub fn with_arrival_rate(self, arrival_rate: u8) -> SyncResult<Self> {
        Ok(Self { arrival_rate: check_arrival_rate(arrival_rate)?, ..self })
    }

    /// Maximum number of customers waiting at once.
    #[inline]
    pub fn chairs(&self) -> u8 {
        self.chairs
    }

    /// Percentage chance that an arrival trial produces a customer.
    #[inline]
    pub fn arrival_rate(&self) -> u8 {
        self.arrival_rate
    }
}

impl Default for BarberConfig {
    /// Three chairs, 70 % arrival rate.
    fn default() -> Self {
        Self { chairs: 3, arrival_rate: 70 }
    }
}

fn check_chairs(chairs: u8) -> SyncResult<u8> {
    if CHAIRS.contains(&chairs) {
        Ok(chairs)
    } else {
        Err(SyncError::OutOfRange {
            what:  "waiting chairs",
            value: chairs as u64,
            min:   *CHAIRS.start() as u64,
            max:   *CHAIRS.end() as u64,
        })
    }
}

fn check_arrival_rate(rate: u8) -> SyncResult<u8> {
    if !ARRIVAL_RATE.contains(&rate) {
        return Err(SyncError::OutOfRange {
            what:  "arrival rate",
            value: rate as u64,
            min:   *ARRIVAL_RATE.start() as u64,
            max:   *ARRIVAL_RATE.end() as u64,
        });
    }
    if rate % ARRIVAL_RATE_STEP != 0 {
        return Err(SyncError::InvalidValue {
            what:  "arrival rate",
            value: format!("{rate} (must be a multiple of {ARRIVAL_RATE_STEP})"),
        });
    }
    Ok(rate)
}
