//! The `Sim` struct and its timer loop.

use sync_core::{SimClock, SimConfig, SimRng, SimTime, Simulation, Speed, TimerLane};
use tracing::{debug, info};

use crate::timer::TimerQueue;
use crate::{SimError, SimObserver, SimResult};

/// Drives one [`Simulation`] from its timers.
///
/// `Sim` owns everything the model needs besides its own state:
///
/// - a virtual millisecond [`SimClock`], moved only by [`advance`][Self::advance];
/// - the seeded [`SimRng`];
/// - a [`TimerQueue`] holding the next deadline of every armed lane.
///
/// Starting arms each of the model's lanes one period from now.  Pausing or
/// resetting drops every pending deadline at once, so a paused simulation
/// cannot log anything no matter how far the clock moves.  Changing speed
/// while running re-arms from the current instant.
///
/// Create via [`Sim::new`] or [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: Simulation> {
    /// Speed, seed and wall-clock origin.
    pub config: SimConfig,

    clock:   SimClock,
    rng:     SimRng,
    timers:  TimerQueue,
    running: bool,
    model:   S,
    /// Total timer firings since construction.
    fired:   u64,
}

impl<S: Simulation> Sim<S> {
    /// A paused runner around `model`.
    pub fn new(config: SimConfig, model: S) -> Self {
        Self {
            clock:   config.make_clock(),
            rng:     SimRng::new(config.seed),
            timers:  TimerQueue::new(),
            running: false,
            model,
            fired:   0,
            config,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn model(&self) -> &S {
        &self.model
    }

    /// Unrestricted access for settings that may change while running
    /// (arrival rate).  Paused-only controls go through
    /// [`with_paused`][Self::with_paused].
    pub fn model_mut(&mut self) -> &mut S {
        &mut self.model
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> Speed {
        self.config.speed
    }

    pub fn timers_fired(&self) -> u64 {
        self.fired
    }

    /// Number of armed lanes (0 while paused).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Start the timers.  No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.arm();
        info!(sim = S::NAME, at = %self.clock.now, speed = %self.config.speed, "started");
    }

    /// Stop the timers, keeping model state.  No-op if already paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.timers.clear();
        info!(sim = S::NAME, at = %self.clock.now, "paused");
    }

    /// Start if paused, pause if running.  Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Stop the timers and return the model to its initial state.
    pub fn reset(&mut self) {
        self.running = false;
        self.timers.clear();
        self.model.reset();
        info!(sim = S::NAME, at = %self.clock.now, "reset");
    }

    /// Change the tick period.  Running timers are re-armed from now.
    pub fn set_speed(&mut self, speed: Speed) {
        if speed == self.config.speed {
            return;
        }
        self.config.speed = speed;
        if self.running {
            self.timers.clear();
            self.arm();
        }
        info!(sim = S::NAME, %speed, "speed changed");
    }

    /// Run `f` against the model only while paused; used for the controls
    /// that are disabled during a run (manual arrivals, chair capacity).
    pub fn with_paused<R>(&mut self, f: impl FnOnce(&mut S, &SimClock) -> R) -> SimResult<R> {
        if self.running {
            return Err(SimError::Running);
        }
        Ok(f(&mut self.model, &self.clock))
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Move the clock forward `ms` milliseconds, firing every timer that
    /// falls due on the way.  Returns the number of firings.
    pub fn advance<O: SimObserver<S::Event>>(&mut self, ms: u64, observer: &mut O) -> usize {
        let target = self.clock.now + ms;
        self.advance_to(target, observer)
    }

    /// Like [`advance`][Self::advance] with an absolute target.
    pub fn advance_to<O: SimObserver<S::Event>>(
        &mut self,
        target:   SimTime,
        observer: &mut O,
    ) -> usize {
        let mut count = 0;
        while self.running {
            let Some((at, lanes)) = self.timers.pop_due(target) else {
                break;
            };
            for lane in lanes {
                self.fire(at, lane, observer);
                count += 1;
            }
        }
        self.clock.advance_to(target);
        count
    }

    /// Jump from deadline to deadline until `n` `Step` lanes have fired.
    ///
    /// Returns the total number of firings (arrival trials included).
    pub fn run_steps<O: SimObserver<S::Event>>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        if !self.running {
            return Err(SimError::NotRunning);
        }
        let mut steps = 0;
        let mut total = 0;
        while steps < n {
            let Some(at) = self.timers.next_deadline() else {
                break;
            };
            let Some((at, lanes)) = self.timers.pop_due(at) else {
                break;
            };
            for lane in lanes {
                self.fire(at, lane, observer);
                total += 1;
                if lane == TimerLane::Step {
                    steps += 1;
                }
            }
        }
        Ok(total)
    }

    /// Advance by `ms` and then report the end of the run to `observer`.
    pub fn run_for<O: SimObserver<S::Event>>(&mut self, ms: u64, observer: &mut O) -> usize {
        let count = self.advance(ms, observer);
        observer.on_sim_end(&self.clock);
        count
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn arm(&mut self) {
        let now = self.clock.now;
        for &lane in self.model.lanes() {
            self.timers.push(now + lane.period_ms(self.config.speed), lane);
        }
    }

    fn fire<O: SimObserver<S::Event>>(&mut self, at: SimTime, lane: TimerLane, observer: &mut O) {
        self.clock.advance_to(at);
        let events = self.model.on_timer(lane, &self.clock, &mut self.rng);
        self.fired += 1;
        self.timers.push(at + lane.period_ms(self.config.speed), lane);

        debug!(sim = S::NAME, at = %at, %lane, events = events.len(), "timer fired");
        observer.on_timer(&self.clock, lane, &events);
        if lane == TimerLane::Step {
            observer.on_summary(&self.clock, &self.model.summary());
        }
    }
}
