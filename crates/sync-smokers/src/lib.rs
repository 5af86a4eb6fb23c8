//! `sync-smokers` — the cigarette smokers problem as a timer-driven state
//! machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`ingredient`] | `Ingredient`                                         |
//! | [`smoker`]     | `Smoker`, `SmokerStatus`, the fixed three-smoker roster |
//! | [`table`]      | `Table`: empty or exactly two distinct ingredients   |
//! | [`event`]      | `SmokerEvent`                                        |
//! | [`room`]       | `SmokersRoom`: the state machine                     |
//! | [`error`]      | `SmokersError`, `SmokersResult<T>`                   |
//!
//! # Transitions
//!
//! ```text
//! step (every speed ms), first match wins:
//!   ① someone is smoking      → they finish; table cleared; agent idle
//!   ② table empty, agent idle → agent places two random ingredients
//!   ③ table holds a pair      → the waiting smoker who needs that pair lights up
//!   ④ otherwise nothing
//! ```

pub mod error;
pub mod event;
pub mod ingredient;
pub mod room;
pub mod smoker;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{SmokersError, SmokersResult};
pub use event::SmokerEvent;
pub use ingredient::Ingredient;
pub use room::{AgentStatus, SmokersRoom};
pub use smoker::{Smoker, SmokerStatus};
pub use table::Table;
