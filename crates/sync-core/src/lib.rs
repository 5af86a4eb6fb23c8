//! `sync-core` — foundational types shared by the barber and smokers
//! simulators.
//!
//! This crate has no `sync-*` dependencies and minimal external ones (only
//! `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `CustomerId`, `SmokerId`                                   |
//! | [`time`]    | `SimTime`, `WallTime`, `SimClock`, `Speed`, `SimConfig`    |
//! | [`rng`]     | `SimRng`                                                   |
//! | [`log`]     | `EventLog`, `LogEntry` (bounded, newest first)             |
//! | [`model`]   | `Simulation` trait, `TimerLane`, `Summary`                 |
//! | [`error`]   | `SyncError`, `SyncResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod ids;
pub mod log;
pub mod model;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SyncError, SyncResult};
pub use ids::{CustomerId, SmokerId};
pub use log::{EventLog, LOG_CAPACITY, LogEntry};
pub use model::{Simulation, Summary, TimerLane};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, SimTime, Speed, WallTime};
