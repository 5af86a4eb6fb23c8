//! Unit tests for sync-barber.

use sync_core::{CustomerId, SimClock, SimRng, SimTime};

use crate::{BarberConfig, BarberEvent, BarberShop, BarberStatus, CustomerStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn shop(chairs: u8, rate: u8) -> BarberShop {
    BarberShop::new(BarberConfig::new(chairs, rate).unwrap())
}

fn clock_at(ms: u64) -> SimClock {
    let mut clock = SimClock::new(0);
    clock.advance_to(SimTime(ms));
    clock
}

fn assert_invariants(shop: &BarberShop) {
    let cutting = shop
        .customers()
        .iter()
        .filter(|c| c.status == CustomerStatus::GettingHaircut)
        .count();
    assert!(cutting <= 1, "{cutting} customers in the barber's chair");
    assert_eq!(shop.status() == BarberStatus::Cutting, cutting == 1);
    assert!(shop.waiting_count() <= shop.config().chairs() as usize);
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use sync_core::SyncError;

    use crate::BarberConfig;

    #[test]
    fn defaults() {
        let cfg = BarberConfig::default();
        assert_eq!(cfg.chairs(), 3);
        assert_eq!(cfg.arrival_rate(), 70);
    }

    #[test]
    fn chairs_out_of_range_rejected() {
        assert!(matches!(
            BarberConfig::default().with_chairs(0),
            Err(SyncError::OutOfRange { what: "waiting chairs", value: 0, .. })
        ));
        assert!(BarberConfig::default().with_chairs(11).is_err());
        assert_eq!(BarberConfig::default().with_chairs(10).unwrap().chairs(), 10);
    }

    #[test]
    fn arrival_rate_must_be_a_step() {
        assert!(BarberConfig::default().with_arrival_rate(5).is_err());
        assert!(BarberConfig::default().with_arrival_rate(110).is_err());
        assert!(matches!(
            BarberConfig::default().with_arrival_rate(55),
            Err(SyncError::InvalidValue { what: "arrival rate", .. })
        ));
        assert_eq!(BarberConfig::default().with_arrival_rate(100).unwrap().arrival_rate(), 100);
    }
}

// ── Arrivals ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use super::*;

    #[test]
    fn admit_takes_a_chair() {
        let mut s = shop(3, 70);
        let event = s.admit(&clock_at(0));
        assert_eq!(event, BarberEvent::Arrived(CustomerId(1)));
        assert_eq!(s.waiting_count(), 1);
        assert_eq!(s.next_id(), CustomerId(2));
        assert_eq!(s.log().latest().unwrap().message, "Customer 1 arrived and is waiting");
    }

    #[test]
    fn second_arrival_rejected_at_capacity_one() {
        let mut s = shop(1, 100);
        let clock = clock_at(0);
        s.admit(&clock);
        let event = s.admit(&clock);
        assert_eq!(event, BarberEvent::Rejected(CustomerId(2)));
        assert_eq!(s.rejected(), 1);
        assert_eq!(s.customers().len(), 1);
        assert_eq!(s.log().latest().unwrap().message, "Customer 2 left - no chairs available");
    }

    #[test]
    fn ids_skip_after_rejection() {
        let mut s = shop(1, 100);
        let clock = clock_at(0);
        s.admit(&clock);
        s.admit(&clock); // rejected, id 2 consumed
        s.step(&clock); // customer 1 to the chair
        let event = s.admit(&clock);
        assert_eq!(event, BarberEvent::Arrived(CustomerId(3)));
    }

    #[test]
    fn customer_in_chair_does_not_use_a_waiting_seat() {
        let mut s = shop(1, 100);
        let clock = clock_at(0);
        s.admit(&clock);
        s.step(&clock);
        assert_eq!(s.waiting_count(), 0);
        assert_eq!(s.admit(&clock), BarberEvent::Arrived(CustomerId(2)));
    }

    #[test]
    fn full_rate_always_arrives() {
        let mut s = shop(10, 100);
        let mut rng = SimRng::new(1);
        let clock = clock_at(0);
        for _ in 0..10 {
            assert!(s.arrival_trial(&clock, &mut rng).is_some());
        }
        assert_eq!(s.waiting_count(), 10);
    }

    #[test]
    fn low_rate_sometimes_skips() {
        let mut s = shop(10, 10);
        let mut rng = SimRng::new(3);
        let clock = clock_at(0);
        let mut attempts = 0;
        for _ in 0..200 {
            if s.arrival_trial(&clock, &mut rng).is_some() {
                attempts += 1;
            }
            s.reset();
        }
        assert!(attempts > 0 && attempts < 100, "got {attempts} arrivals at 10 %");
    }
}

// ── Service ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn sleeping_with_nobody_stays_asleep() {
        let mut s = shop(3, 70);
        assert!(s.step(&clock_at(0)).is_empty());
        assert_eq!(s.status(), BarberStatus::Sleeping);
        assert!(s.log().is_empty());
    }

    #[test]
    fn wakes_for_first_customer() {
        let mut s = shop(3, 70);
        let clock = clock_at(0);
        s.admit(&clock);
        let events = s.step(&clock);
        assert_eq!(events, [BarberEvent::WokeUp(CustomerId(1))]);
        assert_eq!(s.status(), BarberStatus::Cutting);
        assert_eq!(s.serving().unwrap().id, CustomerId(1));
        assert_invariants(&s);
    }

    #[test]
    fn finishing_with_queue_goes_idle_then_cuts_next() {
        let mut s = shop(3, 70);
        let clock = clock_at(0);
        s.admit(&clock);
        s.admit(&clock);
        s.step(&clock);

        let events = s.step(&clock);
        assert_eq!(events, [BarberEvent::Finished(CustomerId(1))]);
        assert_eq!(s.status(), BarberStatus::Idle);
        assert_eq!(s.served(), 1);
        assert_invariants(&s);

        let events = s.step(&clock);
        assert_eq!(events, [BarberEvent::StartedCut(CustomerId(2))]);
        assert_eq!(s.status(), BarberStatus::Cutting);
    }

    #[test]
    fn finishing_last_customer_falls_asleep() {
        let mut s = shop(3, 70);
        let clock = clock_at(0);
        s.admit(&clock);
        s.step(&clock);
        let events = s.step(&clock);
        assert_eq!(events, [BarberEvent::Finished(CustomerId(1)), BarberEvent::FellAsleep]);
        assert_eq!(s.status(), BarberStatus::Sleeping);
        assert!(s.customers().is_empty());
        assert_eq!(
            s.log().latest().unwrap().message,
            "Barber went to sleep - no customers waiting"
        );
    }

    #[test]
    fn serves_in_fifo_order() {
        let mut s = shop(5, 70);
        let clock = clock_at(0);
        for _ in 0..3 {
            s.admit(&clock);
        }
        let mut order = Vec::new();
        for _ in 0..6 {
            for event in s.step(&clock) {
                if let BarberEvent::Finished(id) = event {
                    order.push(id.0);
                }
            }
        }
        assert_eq!(order, [1, 2, 3]);
    }

    #[test]
    fn log_entries_carry_clock_stamp() {
        let mut s = shop(3, 70);
        s.admit(&clock_at(4_000));
        assert_eq!(s.log().latest().unwrap().to_string(), "[00:00:04] Customer 1 arrived and is waiting");
    }
}

// ── Settings while populated ──────────────────────────────────────────────────

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn cannot_shrink_below_waiting() {
        let mut s = shop(3, 70);
        let clock = clock_at(0);
        s.admit(&clock);
        s.admit(&clock);
        assert!(s.set_chairs(1).is_err());
        assert_eq!(s.config().chairs(), 3);
        s.set_chairs(2).unwrap();
        assert_eq!(s.config().chairs(), 2);
    }

    #[test]
    fn invalid_rate_leaves_setting_unchanged() {
        let mut s = shop(3, 70);
        assert!(s.set_arrival_rate(0).is_err());
        assert_eq!(s.config().arrival_rate(), 70);
        s.set_arrival_rate(40).unwrap();
        assert_eq!(s.config().arrival_rate(), 40);
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn reset_restores_initial_state() {
        let mut s = shop(1, 100);
        let clock = clock_at(0);
        s.admit(&clock);
        s.admit(&clock);
        s.step(&clock);
        s.step(&clock);
        assert!(s.served() > 0 && s.rejected() > 0);

        s.reset();
        assert_eq!(s.status(), BarberStatus::Sleeping);
        assert!(s.customers().is_empty());
        assert_eq!(s.served(), 0);
        assert_eq!(s.rejected(), 0);
        assert_eq!(s.next_id(), CustomerId::FIRST);
        assert!(s.log().is_empty());
        // Settings survive.
        assert_eq!(s.config().chairs(), 1);
    }
}

// ── Invariants under arbitrary operation sequences ────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Debug)]
    enum Op {
        Step,
        Admit,
        SetChairs(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => Just(Op::Step),
            3 => Just(Op::Admit),
            1 => (0u8..12).prop_map(Op::SetChairs),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_every_step(chairs in 1u8..=10, ops in prop::collection::vec(op(), 0..200)) {
            let mut s = shop(chairs, 70);
            let clock = clock_at(0);
            let mut served = 0;
            let mut rejected = 0;

            for op in ops {
                let len_before = s.customers().len();
                match op {
                    Op::Step => { s.step(&clock); }
                    Op::Admit => {
                        if let BarberEvent::Rejected(_) = s.admit(&clock) {
                            prop_assert_eq!(s.customers().len(), len_before);
                        }
                    }
                    Op::SetChairs(n) => { let _ = s.set_chairs(n); }
                }
                assert_invariants(&s);
                prop_assert!(s.served() >= served);
                prop_assert!(s.rejected() >= rejected);
                served = s.served();
                rejected = s.rejected();
            }
        }
    }
}
