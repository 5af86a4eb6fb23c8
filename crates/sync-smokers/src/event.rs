use std::fmt;

use sync_core::SmokerId;

use crate::Ingredient;

/// One transition in the smokers' room.  `Display` is the log line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SmokerEvent {
    Placed([Ingredient; 2]),
    Started { smoker: SmokerId, has: Ingredient },
    Finished { smoker: SmokerId, has: Ingredient },
}

impl fmt::Display for SmokerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokerEvent::Placed([a, b]) => write!(f, "Agent placed: {a} + {b}"),
            SmokerEvent::Started { smoker, has } => {
                write!(f, "Smoker {smoker} (has {has}) is making and smoking a cigarette")
            }
            SmokerEvent::Finished { smoker, has } => {
                write!(f, "Smoker {smoker} (has {has}) finished smoking")
            }
        }
    }
}
