use std::fmt;

use sync_core::CustomerId;

/// Something that happened in the shop.  The `Display` text is what lands
/// in the event log.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BarberEvent {
    /// A customer took a waiting chair.
    Arrived(CustomerId),
    /// A customer found every chair taken and left.
    Rejected(CustomerId),
    /// The barber was asleep and starts on this customer.
    WokeUp(CustomerId),
    /// The barber was idle and starts on this customer.
    StartedCut(CustomerId),
    /// This customer's haircut is complete.
    Finished(CustomerId),
    /// Nobody is waiting after a haircut.
    FellAsleep,
}

impl BarberEvent {
    /// The customer this event concerns, if any.
    pub fn customer(&self) -> Option<CustomerId> {
        match *self {
            BarberEvent::Arrived(id)
            | BarberEvent::Rejected(id)
            | BarberEvent::WokeUp(id)
            | BarberEvent::StartedCut(id)
            | BarberEvent::Finished(id) => Some(id),
            BarberEvent::FellAsleep => None,
        }
    }
}

impl fmt::Display for BarberEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarberEvent::Arrived(id)    => write!(f, "Customer {id} arrived and is waiting"),
            BarberEvent::Rejected(id)   => write!(f, "Customer {id} left - no chairs available"),
            BarberEvent::WokeUp(id)     => write!(f, "Barber woke up! Starting to cut Customer {id}'s hair"),
            BarberEvent::StartedCut(id) => write!(f, "Barber started cutting Customer {id}'s hair"),
            BarberEvent::Finished(id)   => write!(f, "Customer {id} finished haircut"),
            BarberEvent::FellAsleep     => f.write_str("Barber went to sleep - no customers waiting"),
        }
    }
}
