//! Plain data rows written by output backends.

/// One event produced by one timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Simulated milliseconds since the run began.
    pub time_ms:    u64,
    /// Simulated wall clock, `HH:MM:SS`.
    pub wall:       String,
    pub simulation: String,
    /// `step` or `arrival`.
    pub lane:       String,
    pub message:    String,
}

/// Derived statistics after one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub time_ms:    u64,
    pub simulation: String,
    pub status:     String,
    pub occupancy:  u64,
    pub completed:  u64,
    pub rejected:   u64,
}
