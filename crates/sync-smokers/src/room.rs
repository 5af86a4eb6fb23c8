//! The `SmokersRoom` state machine.

use std::fmt;

use sync_core::{EventLog, SimClock, SimRng, Simulation, Summary, TimerLane};
use tracing::debug;

use crate::{Ingredient, Smoker, SmokerEvent, SmokerStatus, SmokersResult, Table};

const LANES: &[TimerLane] = &[TimerLane::Step];

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AgentStatus {
    /// Waiting for the table to be cleared.
    #[default]
    Idle,
    /// Has put this round's pair on the table.
    Placing,
}

impl AgentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Idle    => "idle",
            AgentStatus::Placing => "placing",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The agent, the table and the three smokers.
#[derive(Clone, Debug)]
pub struct SmokersRoom {
    table:   Table,
    agent:   AgentStatus,
    smokers: [Smoker; 3],
    log:     EventLog,
}

impl SmokersRoom {
    pub fn new() -> Self {
        Self {
            table:   Table::empty(),
            agent:   AgentStatus::Idle,
            smokers: Smoker::roster(),
            log:     EventLog::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn agent(&self) -> AgentStatus {
        self.agent
    }

    pub fn smokers(&self) -> &[Smoker; 3] {
        &self.smokers
    }

    pub fn smoking(&self) -> Option<&Smoker> {
        self.smokers.iter().find(|s| s.status == SmokerStatus::Smoking)
    }

    pub fn total_smokes(&self) -> u64 {
        self.smokers.iter().map(|s| s.smokes).sum()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// One tick of the room.  Produces at most one event.
    pub fn step(&mut self, clock: &SimClock, rng: &mut SimRng) -> Option<SmokerEvent> {
        let event = if let Some(smoker) = self
            .smokers
            .iter_mut()
            .find(|s| s.status == SmokerStatus::Smoking)
        {
            smoker.status = SmokerStatus::Waiting;
            smoker.smokes += 1;
            self.table.clear();
            self.agent = AgentStatus::Idle;
            Some(SmokerEvent::Finished { smoker: smoker.id, has: smoker.has })
        } else if self.table.is_empty() && self.agent == AgentStatus::Idle {
            let mut all = Ingredient::ALL;
            rng.shuffle(&mut all);
            let pair = [all[0], all[1]];
            self.table = Table::holding(pair);
            self.agent = AgentStatus::Placing;
            Some(SmokerEvent::Placed(pair))
        } else {
            let table = self.table;
            self.smokers
                .iter_mut()
                .find(|s| s.status == SmokerStatus::Waiting && table.satisfies(s.needs()))
                .map(|smoker| {
                    smoker.status = SmokerStatus::Smoking;
                    SmokerEvent::Started { smoker: smoker.id, has: smoker.has }
                })
        };

        debug!(
            table  = %self.table,
            agent  = %self.agent,
            smokes = self.total_smokes(),
            "smokers step"
        );
        if let Some(event) = &event {
            self.log.push(clock, event.to_string());
        }
        event
    }

    /// Have the agent place a chosen pair instead of a random one.
    ///
    /// Fails if the table is not empty or the pair repeats an ingredient.
    pub fn place(&mut self, pair: [Ingredient; 2], clock: &SimClock) -> SmokersResult<SmokerEvent> {
        self.table.place(pair)?;
        self.agent = AgentStatus::Placing;
        let event = SmokerEvent::Placed(pair);
        self.log.push(clock, event.to_string());
        Ok(event)
    }

    /// Empty table, idle agent, fresh roster, empty log.
    pub fn reset(&mut self) {
        self.table.clear();
        self.agent = AgentStatus::Idle;
        self.smokers = Smoker::roster();
        self.log.clear();
    }
}

impl Default for SmokersRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SmokersRoom {
    type Event = SmokerEvent;

    const NAME: &'static str = "smokers";

    fn lanes(&self) -> &'static [TimerLane] {
        LANES
    }

    fn on_timer(
        &mut self,
        lane:  TimerLane,
        clock: &SimClock,
        rng:   &mut SimRng,
    ) -> Vec<SmokerEvent> {
        match lane {
            TimerLane::Step    => self.step(clock, rng).into_iter().collect(),
            TimerLane::Arrival => Vec::new(),
        }
    }

    fn reset(&mut self) {
        SmokersRoom::reset(self);
    }

    fn log(&self) -> &EventLog {
        &self.log
    }

    fn summary(&self) -> Summary {
        Summary {
            status:    self.agent.as_str(),
            occupancy: self.table.len() as u64,
            completed: self.total_smokes(),
            rejected:  0,
        }
    }
}
