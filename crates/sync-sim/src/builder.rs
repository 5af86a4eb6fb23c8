//! Fluent builder for constructing a [`Sim`].

use sync_core::{SimConfig, Simulation, Speed};

use crate::Sim;

/// Fluent builder for [`Sim<S>`].
///
/// | Method                 | Default                 |
/// |------------------------|-------------------------|
/// | `.config(c)`           | `SimConfig::default()`  |
/// | `.speed(s)`            | `Speed::Normal`         |
/// | `.seed(n)`             | `42`                    |
/// | `.start_unix_secs(t)`  | `0`                     |
/// | `.running(b)`          | `false`                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(BarberShop::default())
///     .speed(Speed::Fast)
///     .seed(7)
///     .running(true)
///     .build();
/// sim.advance(10_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<S: Simulation> {
    config:  SimConfig,
    model:   S,
    running: bool,
}

impl<S: Simulation> SimBuilder<S> {
    pub fn new(model: S) -> Self {
        Self { config: SimConfig::default(), model, running: false }
    }

    /// Replace the whole config; later `speed`/`seed` calls still apply.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn speed(mut self, speed: Speed) -> Self {
        self.config.speed = speed;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn start_unix_secs(mut self, secs: i64) -> Self {
        self.config.start_unix_secs = secs;
        self
    }

    /// Start the timers as soon as the runner is built.
    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn build(self) -> Sim<S> {
        let mut sim = Sim::new(self.config, self.model);
        if self.running {
            sim.start();
        }
        sim
    }
}
