//! `sync-barber` — the sleeping barber problem as a timer-driven state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`customer`] | `Customer`, `CustomerStatus`, `BarberStatus`               |
//! | [`config`]   | `BarberConfig`: chair capacity and arrival rate            |
//! | [`event`]    | `BarberEvent`: one value per log line                      |
//! | [`shop`]     | `BarberShop`: the state machine                            |
//!
//! # Transitions
//!
//! ```text
//! step (every speed ms), first match wins:
//!   ① someone is getting a haircut → finish it; sleep if nobody waits, else idle
//!   ② sleeping/idle and someone waits → cut the lowest-numbered waiting customer
//!   ③ otherwise nothing
//!
//! arrival (every speed × 1.5 ms):
//!   roll [0, 100) < arrival rate → a customer tries to sit down
//! ```

pub mod config;
pub mod customer;
pub mod event;
pub mod shop;

#[cfg(test)]
mod tests;

pub use config::BarberConfig;
pub use customer::{BarberStatus, Customer, CustomerStatus};
pub use event::BarberEvent;
pub use shop::BarberShop;
