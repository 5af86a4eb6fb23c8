//! The `BarberShop` state machine.

use sync_core::{
    CustomerId, EventLog, SimClock, SimRng, Simulation, Summary, SyncError, SyncResult, TimerLane,
};
use tracing::{debug, trace, warn};

use crate::{BarberConfig, BarberEvent, BarberStatus, Customer, CustomerStatus};

const LANES: &[TimerLane] = &[TimerLane::Step, TimerLane::Arrival];

/// One barber, a row of waiting chairs, and the customers currently inside.
///
/// Customers are kept in arrival order, so the first waiting customer in
/// `customers` is also the one with the smallest id.
#[derive(Clone, Debug)]
pub struct BarberShop {
    config:    BarberConfig,
    status:    BarberStatus,
    customers: Vec<Customer>,
    served:    u64,
    rejected:  u64,
    next_id:   CustomerId,
    log:       EventLog,
}

impl BarberShop {
    pub fn new(config: BarberConfig) -> Self {
        Self {
            config,
            status:    BarberStatus::Sleeping,
            customers: Vec::new(),
            served:    0,
            rejected:  0,
            next_id:   CustomerId::FIRST,
            log:       EventLog::new(),
        }
    }

    // ── Settings ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &BarberConfig {
        &self.config
    }

    /// Change the number of waiting chairs.
    ///
    /// Rejects values outside 1–10, and values below the number of
    /// customers already waiting (nobody is turned out of a chair).
    pub fn set_chairs(&mut self, chairs: u8) -> SyncResult<()> {
        let waiting = self.waiting_count();
        if (chairs as usize) < waiting {
            let err = SyncError::OutOfRange {
                what:  "waiting chairs",
                value: chairs as u64,
                min:   waiting as u64,
                max:   *crate::config::CHAIRS.end() as u64,
            };
            warn!(%err, "chair change rejected");
            return Err(err);
        }
        self.config = self
            .config
            .with_chairs(chairs)
            .inspect_err(|err| warn!(%err, "chair change rejected"))?;
        Ok(())
    }

    pub fn set_arrival_rate(&mut self, rate: u8) -> SyncResult<()> {
        self.config = self
            .config
            .with_arrival_rate(rate)
            .inspect_err(|err| warn!(%err, "arrival rate change rejected"))?;
        Ok(())
    }

    // ── Derived state ─────────────────────────────────────────────────────

    pub fn status(&self) -> BarberStatus {
        self.status
    }

    /// Everyone inside, in arrival order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn waiting(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter().filter(|c| c.is_waiting())
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting().count()
    }

    /// The customer in the barber's chair.
    pub fn serving(&self) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.status == CustomerStatus::GettingHaircut)
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// The id the next arrival attempt will receive.
    pub fn next_id(&self) -> CustomerId {
        self.next_id
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// One barber tick.
    pub fn step(&mut self, clock: &SimClock) -> Vec<BarberEvent> {
        let mut events = Vec::with_capacity(2);

        if let Some(pos) = self
            .customers
            .iter()
            .position(|c| c.status == CustomerStatus::GettingHaircut)
        {
            let done = self.customers.remove(pos);
            self.served += 1;
            events.push(BarberEvent::Finished(done.id));

            if self.customers.iter().any(Customer::is_waiting) {
                self.status = BarberStatus::Idle;
            } else {
                self.status = BarberStatus::Sleeping;
                events.push(BarberEvent::FellAsleep);
            }
        } else if matches!(self.status, BarberStatus::Sleeping | BarberStatus::Idle) {
            let next = self
                .customers
                .iter_mut()
                .filter(|c| c.is_waiting())
                .min_by_key(|c| c.id);

            if let Some(customer) = next {
                customer.status = CustomerStatus::GettingHaircut;
                events.push(if self.status == BarberStatus::Sleeping {
                    BarberEvent::WokeUp(customer.id)
                } else {
                    BarberEvent::StartedCut(customer.id)
                });
                self.status = BarberStatus::Cutting;
            }
        }

        debug!(
            status   = %self.status,
            waiting  = self.waiting_count(),
            served   = self.served,
            "barber step"
        );
        self.record(clock, &events);
        events
    }

    /// Roll against the arrival rate; on success a customer tries to come in.
    pub fn arrival_trial(&mut self, clock: &SimClock, rng: &mut SimRng) -> Option<BarberEvent> {
        let roll = rng.percent();
        trace!(roll, rate = self.config.arrival_rate(), "arrival trial");
        if roll < self.config.arrival_rate() as f64 {
            Some(self.admit(clock))
        } else {
            None
        }
    }

    /// One arrival attempt.  The id counter advances whether or not the
    /// customer finds a chair.
    pub fn admit(&mut self, clock: &SimClock) -> BarberEvent {
        let id = self.next_id;
        self.next_id = id.next();

        let event = if self.waiting_count() >= self.config.chairs() as usize {
            self.rejected += 1;
            BarberEvent::Rejected(id)
        } else {
            self.customers.push(Customer::waiting(id));
            BarberEvent::Arrived(id)
        };

        debug!(customer = %id, ?event, "arrival");
        self.record(clock, std::slice::from_ref(&event));
        event
    }

    /// Back to an empty, sleeping shop.  Settings are kept.
    pub fn reset(&mut self) {
        self.status = BarberStatus::Sleeping;
        self.customers.clear();
        self.served = 0;
        self.rejected = 0;
        self.next_id = CustomerId::FIRST;
        self.log.clear();
    }

    fn record(&mut self, clock: &SimClock, events: &[BarberEvent]) {
        for event in events {
            self.log.push(clock, event.to_string());
        }
    }
}

impl Default for BarberShop {
    fn default() -> Self {
        Self::new(BarberConfig::default())
    }
}

impl Simulation for BarberShop {
    type Event = BarberEvent;

    const NAME: &'static str = "barber";

    fn lanes(&self) -> &'static [TimerLane] {
        LANES
    }

    fn on_timer(
        &mut self,
        lane:  TimerLane,
        clock: &SimClock,
        rng:   &mut SimRng,
    ) -> Vec<BarberEvent> {
        match lane {
            TimerLane::Step    => self.step(clock),
            TimerLane::Arrival => self.arrival_trial(clock, rng).into_iter().collect(),
        }
    }

    fn reset(&mut self) {
        BarberShop::reset(self);
    }

    fn log(&self) -> &EventLog {
        &self.log
    }

    fn summary(&self) -> Summary {
        Summary {
            status:    self.status.as_str(),
            occupancy: self.waiting_count() as u64,
            completed: self.served,
            rejected:  self.rejected,
        }
    }
}
