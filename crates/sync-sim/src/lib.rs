//! `sync-sim` — timer-driven runner for the synchronization simulators.
//!
//! # Timer loop
//!
//! ```text
//! advance(ms):
//!   while running and the earliest deadline ≤ now + ms:
//!     ① pop every lane due at that deadline (in push order)
//!     ② move the clock to the deadline
//!     ③ Simulation::on_timer(lane)   (one complete transition)
//!     ④ re-arm the lane one period later
//!     ⑤ observer hooks (on_timer, and on_summary after a Step)
//!   move the clock to now + ms
//! ```
//!
//! Nothing here sleeps: callers decide how simulated time maps onto real
//! time.  Tests jump straight through it; the demo binary paces it with a
//! `tokio` interval.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sync_barber::BarberShop;
//! use sync_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BarberShop::default()).running(true).build();
//! sim.run_steps(10, &mut NoopObserver)?;
//! println!("served {}", sim.model().served());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod timer;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use timer::TimerQueue;
