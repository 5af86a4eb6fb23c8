//! Unit tests for sync-smokers.

use sync_core::{SimClock, SimRng, SmokerId};

use crate::{AgentStatus, Ingredient, SmokerEvent, SmokerStatus, SmokersRoom};

fn clock() -> SimClock {
    SimClock::new(0)
}

#[cfg(test)]
mod ingredient_tests {
    use crate::{Ingredient, SmokersError};

    #[test]
    fn others_excludes_self() {
        for i in Ingredient::ALL {
            let others = i.others();
            assert!(!others.contains(&i));
            assert_ne!(others[0], others[1]);
        }
    }

    #[test]
    fn parse_pair_accepts_plus_and_comma() {
        assert_eq!(
            Ingredient::parse_pair("tobacco+paper").unwrap(),
            [Ingredient::Tobacco, Ingredient::Paper]
        );
        assert_eq!(
            Ingredient::parse_pair(" Matches , paper ").unwrap(),
            [Ingredient::Matches, Ingredient::Paper]
        );
    }

    #[test]
    fn parse_pair_errors() {
        assert_eq!(Ingredient::parse_pair("tobacco"), Err(SmokersError::PairLength(1)));
        assert!(matches!(
            Ingredient::parse_pair("tobacco+lighter"),
            Err(SmokersError::UnknownIngredient(_))
        ));
        assert_eq!(
            Ingredient::parse_pair("paper+Paper"),
            Err(SmokersError::DuplicateIngredient(Ingredient::Paper))
        );
    }
}

#[cfg(test)]
mod table_tests {
    use crate::{Ingredient, SmokersError, Table};

    #[test]
    fn place_and_clear() {
        let mut t = Table::empty();
        assert_eq!(t.len(), 0);
        t.place([Ingredient::Paper, Ingredient::Matches]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.to_string(), "paper + matches");
        t.clear();
        assert!(t.is_empty());
    }

    #[test]
    fn cannot_stack_pairs() {
        let mut t = Table::empty();
        t.place([Ingredient::Paper, Ingredient::Matches]).unwrap();
        assert_eq!(
            t.place([Ingredient::Tobacco, Ingredient::Paper]),
            Err(SmokersError::TableOccupied(Ingredient::Paper, Ingredient::Matches))
        );
    }

    #[test]
    fn rejects_duplicate() {
        let mut t = Table::empty();
        assert_eq!(
            t.place([Ingredient::Paper, Ingredient::Paper]),
            Err(SmokersError::DuplicateIngredient(Ingredient::Paper))
        );
        assert!(t.is_empty());
    }

    #[test]
    fn satisfies_in_either_order() {
        let mut t = Table::empty();
        t.place([Ingredient::Paper, Ingredient::Tobacco]).unwrap();
        assert!(t.satisfies([Ingredient::Tobacco, Ingredient::Paper]));
        assert!(!t.satisfies([Ingredient::Tobacco, Ingredient::Matches]));
    }
}

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn roster_partitions_ingredients() {
        let room = SmokersRoom::new();
        let mut has: Vec<_> = room.smokers().iter().map(|s| s.has).collect();
        has.sort();
        assert_eq!(has, Ingredient::ALL.to_vec());
        for s in room.smokers() {
            assert!(!s.needs().contains(&s.has));
        }
    }

    #[test]
    fn first_step_places_two_distinct() {
        let mut room = SmokersRoom::new();
        let mut rng = SimRng::new(9);
        let event = room.step(&clock(), &mut rng).unwrap();
        let SmokerEvent::Placed([a, b]) = event else {
            panic!("expected a placement, got {event:?}");
        };
        assert_ne!(a, b);
        assert_eq!(room.agent(), AgentStatus::Placing);
        assert_eq!(room.table().contents(), Some([a, b]));
        assert!(room.log().latest().unwrap().message.starts_with("Agent placed: "));
    }

    #[test]
    fn forced_tobacco_and_paper_wakes_matches_smoker_only() {
        let mut room = SmokersRoom::new();
        let mut rng = SimRng::new(0);
        room.place([Ingredient::Tobacco, Ingredient::Paper], &clock()).unwrap();

        let event = room.step(&clock(), &mut rng);
        assert_eq!(
            event,
            Some(SmokerEvent::Started { smoker: SmokerId(3), has: Ingredient::Matches })
        );
        for s in room.smokers() {
            let expected = if s.has == Ingredient::Matches {
                SmokerStatus::Smoking
            } else {
                SmokerStatus::Waiting
            };
            assert_eq!(s.status, expected, "smoker {}", s.id);
        }
    }

    #[test]
    fn finishing_clears_table_and_counts() {
        let mut room = SmokersRoom::new();
        let mut rng = SimRng::new(0);
        room.place([Ingredient::Paper, Ingredient::Matches], &clock()).unwrap();
        room.step(&clock(), &mut rng);

        let event = room.step(&clock(), &mut rng);
        assert_eq!(
            event,
            Some(SmokerEvent::Finished { smoker: SmokerId(1), has: Ingredient::Tobacco })
        );
        assert!(room.table().is_empty());
        assert_eq!(room.agent(), AgentStatus::Idle);
        assert_eq!(room.smokers()[0].smokes, 1);
        assert_eq!(room.smokers()[0].status, SmokerStatus::Waiting);
        assert_eq!(room.total_smokes(), 1);
    }

    #[test]
    fn full_cycle_takes_three_steps() {
        let mut room = SmokersRoom::new();
        let mut rng = SimRng::new(5);
        for _ in 0..30 {
            room.step(&clock(), &mut rng);
        }
        assert_eq!(room.total_smokes(), 10);
    }

    #[test]
    fn place_on_occupied_table_fails() {
        let mut room = SmokersRoom::new();
        room.place([Ingredient::Paper, Ingredient::Matches], &clock()).unwrap();
        assert!(room.place([Ingredient::Tobacco, Ingredient::Paper], &clock()).is_err());
        assert_eq!(room.log().len(), 1);
    }

    #[test]
    fn reset_restores_roster() {
        let mut room = SmokersRoom::new();
        let mut rng = SimRng::new(5);
        for _ in 0..7 {
            room.step(&clock(), &mut rng);
        }
        room.reset();
        assert!(room.table().is_empty());
        assert_eq!(room.agent(), AgentStatus::Idle);
        assert!(room.log().is_empty());
        for s in room.smokers() {
            assert_eq!(s.status, SmokerStatus::Waiting);
            assert_eq!(s.smokes, 0);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn table_and_smoking_invariants(seed in any::<u64>(), steps in 1usize..120) {
            let mut room = SmokersRoom::new();
            let mut rng = SimRng::new(seed);
            let mut total = 0;

            for _ in 0..steps {
                let table_before = *room.table();
                let event = room.step(&clock(), &mut rng);

                prop_assert!(room.table().len() == 0 || room.table().len() == 2);
                let smoking: Vec<_> = room
                    .smokers()
                    .iter()
                    .filter(|s| s.status == SmokerStatus::Smoking)
                    .collect();
                prop_assert!(smoking.len() <= 1);

                if let Some(SmokerEvent::Started { smoker, .. }) = event {
                    let s = room.smokers().iter().find(|s| s.id == smoker).unwrap();
                    prop_assert!(table_before.satisfies(s.needs()));
                }
                prop_assert!(room.total_smokes() >= total);
                total = room.total_smokes();
            }
        }
    }
}
