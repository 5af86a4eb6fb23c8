//! Simulation observer trait for rendering and data collection.

use sync_core::{SimClock, Summary, TimerLane};

/// Callbacks invoked by [`Sim::advance`][crate::Sim::advance] as timers fire.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: step counter
///
/// ```rust,ignore
/// struct StepCounter(u64);
///
/// impl<E> SimObserver<E> for StepCounter {
///     fn on_summary(&mut self, _clock: &SimClock, _summary: &Summary) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver<E> {
    /// Called after every timer firing with the events that transition
    /// produced (possibly none).
    fn on_timer(&mut self, _clock: &SimClock, _lane: TimerLane, _events: &[E]) {}

    /// Called after every `Step` firing with the model's headline numbers.
    fn on_summary(&mut self, _clock: &SimClock, _summary: &Summary) {}

    /// Called once by [`Sim::run_for`][crate::Sim::run_for] when the run ends.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl<E> SimObserver<E> for NoopObserver {}
