//! Integration tests for sync-sim, run against both real simulators.

use sync_barber::{BarberConfig, BarberEvent, BarberShop, BarberStatus};
use sync_core::{SimClock, SimTime, Simulation, Speed, Summary, TimerLane};
use sync_smokers::{Ingredient, SmokerStatus, SmokersRoom};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver, TimerQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn barber(chairs: u8, rate: u8) -> Sim<BarberShop> {
    SimBuilder::new(BarberShop::new(BarberConfig::new(chairs, rate).unwrap()))
        .seed(42)
        .build()
}

/// Observer that records every firing and every summary.
#[derive(Default)]
struct Recorder {
    firings:   Vec<(SimTime, TimerLane, usize)>,
    summaries: Vec<Summary>,
    ended:     bool,
}

impl<E> SimObserver<E> for Recorder {
    fn on_timer(&mut self, clock: &SimClock, lane: TimerLane, events: &[E]) {
        self.firings.push((clock.now, lane, events.len()));
    }

    fn on_summary(&mut self, _clock: &SimClock, summary: &Summary) {
        self.summaries.push(summary.clone());
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        self.ended = true;
    }
}

// ── TimerQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer_queue_tests {
    use super::*;

    #[test]
    fn pops_in_deadline_then_push_order() {
        let mut q = TimerQueue::new();
        q.push(SimTime(6_000), TimerLane::Arrival);
        q.push(SimTime(4_000), TimerLane::Step);
        q.push(SimTime(6_000), TimerLane::Step);
        assert_eq!(q.len(), 3);
        assert_eq!(q.next_deadline(), Some(SimTime(4_000)));

        assert_eq!(q.pop_due(SimTime(3_999)), None);
        assert_eq!(q.pop_due(SimTime(5_000)), Some((SimTime(4_000), vec![TimerLane::Step])));
        assert_eq!(
            q.pop_due(SimTime(6_000)),
            Some((SimTime(6_000), vec![TimerLane::Arrival, TimerLane::Step]))
        );
        assert!(q.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.push(SimTime(1), TimerLane::Step);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }
}

// ── Controls ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    #[test]
    fn builder_applies_settings() {
        let sim = SimBuilder::new(SmokersRoom::new())
            .speed(Speed::Slow)
            .seed(9)
            .start_unix_secs(3_600)
            .build();
        assert_eq!(sim.speed(), Speed::Slow);
        assert_eq!(sim.config.seed, 9);
        assert_eq!(sim.clock().start_unix_secs, 3_600);
        assert!(!sim.is_running());
        assert_eq!(sim.pending_timers(), 0);
    }

    #[test]
    fn start_arms_every_lane() {
        let mut sim = barber(3, 70);
        sim.start();
        assert!(sim.is_running());
        assert_eq!(sim.pending_timers(), 2);

        let mut smokers = SimBuilder::new(SmokersRoom::new()).running(true).build();
        assert_eq!(smokers.pending_timers(), 1);
        smokers.start();
        assert_eq!(smokers.pending_timers(), 1, "second start must not double-arm");
    }

    #[test]
    fn toggle_flips() {
        let mut sim = barber(3, 70);
        assert!(sim.toggle());
        assert!(!sim.toggle());
        assert_eq!(sim.pending_timers(), 0);
    }

    #[test]
    fn paused_sim_logs_nothing() {
        let mut sim = barber(3, 100);
        sim.start();
        sim.advance(7_000, &mut NoopObserver);
        sim.pause();

        let log_len = sim.model().log().len();
        let fired = sim.timers_fired();
        let latest = sim.model().log().latest().cloned();
        assert_eq!(sim.advance(60_000, &mut NoopObserver), 0);
        assert_eq!(sim.model().log().len(), log_len);
        assert_eq!(sim.model().log().latest().cloned(), latest);
        assert_eq!(sim.timers_fired(), fired);
        assert_eq!(sim.now(), SimTime(67_000));
    }

    #[test]
    fn reset_stops_and_restores() {
        let mut sim = barber(2, 100);
        sim.start();
        sim.advance(20_000, &mut NoopObserver);
        assert!(sim.model().served() > 0);

        sim.reset();
        assert!(!sim.is_running());
        assert_eq!(sim.pending_timers(), 0);
        let shop = sim.model();
        assert_eq!(shop.status(), BarberStatus::Sleeping);
        assert!(shop.customers().is_empty());
        assert_eq!(shop.served(), 0);
        assert_eq!(shop.rejected(), 0);
        assert_eq!(shop.next_id().0, 1);
        assert!(shop.log().is_empty());

        sim.advance(20_000, &mut NoopObserver);
        assert!(sim.model().log().is_empty());
    }

    #[test]
    fn paused_only_controls() {
        let mut sim = barber(3, 70);
        sim.start();
        assert_eq!(
            sim.with_paused(|shop, clock| shop.admit(clock)),
            Err(SimError::Running)
        );
        assert_eq!(sim.with_paused(|shop, _| shop.set_chairs(5)), Err(SimError::Running));

        sim.pause();
        let event = sim.with_paused(|shop, clock| shop.admit(clock)).unwrap();
        assert!(matches!(event, BarberEvent::Arrived(_)));
        sim.with_paused(|shop, _| shop.set_chairs(5)).unwrap().unwrap();
        assert_eq!(sim.model().config().chairs(), 5);
    }

    #[test]
    fn arrival_rate_changes_while_running() {
        let mut sim = barber(3, 70);
        sim.start();
        sim.model_mut().set_arrival_rate(30).unwrap();
        assert_eq!(sim.model().config().arrival_rate(), 30);
    }

    #[test]
    fn run_steps_requires_running() {
        let mut sim = barber(3, 70);
        assert_eq!(sim.run_steps(1, &mut NoopObserver), Err(SimError::NotRunning));
    }
}

// ── Timing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timing_tests {
    use super::*;

    #[test]
    fn lanes_fire_on_their_periods() {
        let mut sim = barber(3, 70);
        sim.start();
        let mut rec = Recorder::default();
        sim.advance(6_000, &mut rec);

        let fired: Vec<_> = rec.firings.iter().map(|&(at, lane, _)| (at.0, lane)).collect();
        assert_eq!(
            fired,
            [
                (2_000, TimerLane::Step),
                (3_000, TimerLane::Arrival),
                (4_000, TimerLane::Step),
                (6_000, TimerLane::Arrival),
                (6_000, TimerLane::Step),
            ]
        );
        assert_eq!(rec.summaries.len(), 3);
    }

    #[test]
    fn speed_change_rearms_from_now() {
        let mut sim = barber(3, 70);
        sim.start();
        sim.advance(1_000, &mut NoopObserver);
        sim.set_speed(Speed::Fast);

        let mut rec = Recorder::default();
        sim.advance(1_500, &mut rec);
        let fired: Vec<_> = rec.firings.iter().map(|&(at, lane, _)| (at.0, lane)).collect();
        assert_eq!(fired, [(2_000, TimerLane::Step), (2_500, TimerLane::Arrival)]);
    }

    #[test]
    fn run_steps_counts_only_steps() {
        let mut sim = barber(3, 70);
        sim.start();
        let mut rec = Recorder::default();
        let total = sim.run_steps(4, &mut rec).unwrap();
        assert_eq!(rec.summaries.len(), 4);
        // Steps at 2,4,6,8 s; arrivals at 3,6 s.
        assert_eq!(total, 6);
        assert_eq!(sim.now(), SimTime(8_000));
    }

    #[test]
    fn run_for_reports_end() {
        let mut sim = SimBuilder::new(SmokersRoom::new()).running(true).build();
        let mut rec = Recorder::default();
        let count = sim.run_for(10_000, &mut rec);
        assert_eq!(count, 5);
        assert!(rec.ended);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut sim = SimBuilder::new(BarberShop::default()).seed(seed).running(true).build();
            sim.advance(120_000, &mut NoopObserver);
            let shop = sim.model();
            (shop.served(), shop.rejected(), shop.next_id(), shop.log().latest().cloned())
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn log_stamps_follow_sim_clock() {
        let mut sim = SimBuilder::new(SmokersRoom::new())
            .start_unix_secs(12 * 3_600)
            .running(true)
            .build();
        sim.advance(2_000, &mut NoopObserver);
        let entry = sim.model().log().latest().unwrap();
        assert_eq!(entry.at, SimTime(2_000));
        assert!(entry.to_string().starts_with("[12:00:02] Agent placed: "));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Capacity 1, every trial arrives: the arrival landing while customer 3
    /// still waits is turned away.
    #[test]
    fn full_rate_single_chair_rejects() {
        let mut sim = barber(1, 100);
        sim.start();
        sim.advance(12_000, &mut NoopObserver);

        let shop = sim.model();
        assert_eq!(shop.rejected(), 1);
        assert_eq!(shop.served(), 2);
        assert_eq!(shop.status(), BarberStatus::Cutting);
        assert!(
            shop.log()
                .iter()
                .any(|e| e.message == "Customer 4 left - no chairs available")
        );
    }

    #[test]
    fn manual_second_customer_rejected_at_capacity_one() {
        let mut sim = barber(1, 100);
        sim.with_paused(|shop, clock| shop.admit(clock)).unwrap();
        let second = sim.with_paused(|shop, clock| shop.admit(clock)).unwrap();
        assert!(matches!(second, BarberEvent::Rejected(_)));
        assert_eq!(sim.model().rejected(), 1);
    }

    #[test]
    fn forced_pair_lights_matches_smoker() {
        let mut sim = SimBuilder::new(SmokersRoom::new()).build();
        sim.with_paused(|room, clock| room.place([Ingredient::Tobacco, Ingredient::Paper], clock))
            .unwrap()
            .unwrap();
        sim.start();
        sim.run_steps(1, &mut NoopObserver).unwrap();

        let room = sim.model();
        let smoking: Vec<_> = room
            .smokers()
            .iter()
            .filter(|s| s.status == SmokerStatus::Smoking)
            .map(|s| s.has)
            .collect();
        assert_eq!(smoking, [Ingredient::Matches]);
    }

    #[test]
    fn summary_tracks_model() {
        let mut sim = SimBuilder::new(SmokersRoom::new()).running(true).build();
        let mut rec = Recorder::default();
        sim.run_steps(3, &mut rec).unwrap();
        let last = rec.summaries.last().unwrap();
        assert_eq!(last.completed, 1);
        assert_eq!(last.occupancy, 0);
        assert_eq!(last.status, "idle");
        assert_eq!(sim.model().summary(), *last);
    }
}

// ── Invariants under arbitrary control sequences ──────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use sync_barber::CustomerStatus;

    use super::*;

    #[derive(Clone, Debug)]
    enum Control {
        Advance(u64),
        Toggle,
        Reset,
        Speed(Speed),
        Admit,
    }

    fn control() -> impl Strategy<Value = Control> {
        prop_oneof![
            6 => (0u64..10_000).prop_map(Control::Advance),
            2 => Just(Control::Toggle),
            1 => Just(Control::Reset),
            1 => prop::sample::select(Speed::ALL.to_vec()).prop_map(Control::Speed),
            2 => Just(Control::Admit),
        ]
    }

    proptest! {
        #[test]
        fn barber_invariants_under_controls(
            seed in any::<u64>(),
            chairs in 1u8..=10,
            controls in prop::collection::vec(control(), 0..60),
        ) {
            let mut sim = SimBuilder::new(BarberShop::new(BarberConfig::new(chairs, 70).unwrap()))
                .seed(seed)
                .build();

            for c in controls {
                let was_running = sim.is_running();
                let log_before = sim.model().log().latest().cloned();
                match c {
                    Control::Advance(ms) => { sim.advance(ms, &mut NoopObserver); }
                    Control::Toggle      => { sim.toggle(); }
                    Control::Reset       => { sim.reset(); }
                    Control::Speed(s)    => { sim.set_speed(s); }
                    Control::Admit       => { let _ = sim.with_paused(|shop, clock| shop.admit(clock)); }
                }

                let shop = sim.model();
                let cutting = shop
                    .customers()
                    .iter()
                    .filter(|c| c.status == CustomerStatus::GettingHaircut)
                    .count();
                prop_assert!(cutting <= 1);
                prop_assert_eq!(shop.status() == BarberStatus::Cutting, cutting == 1);
                prop_assert!(shop.waiting_count() <= chairs as usize);

                if !was_running {
                    if let Control::Advance(_) = c {
                        prop_assert_eq!(shop.log().latest().cloned(), log_before);
                    }
                }
                if !sim.is_running() {
                    prop_assert_eq!(sim.pending_timers(), 0);
                }
            }
        }
    }
}
