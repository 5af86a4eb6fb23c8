use std::fmt;

use sync_core::CustomerId;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CustomerStatus {
    /// Sitting in a waiting chair.
    Waiting,
    /// In the barber's chair.
    GettingHaircut,
}

impl CustomerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerStatus::Waiting        => "waiting",
            CustomerStatus::GettingHaircut => "getting-haircut",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer inside the shop.  Rejected customers never get one of these.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Customer {
    pub id:     CustomerId,
    pub status: CustomerStatus,
}

impl Customer {
    pub fn waiting(id: CustomerId) -> Self {
        Self { id, status: CustomerStatus::Waiting }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == CustomerStatus::Waiting
    }
}

/// What the barber is doing.  `Cutting` holds exactly while one customer is
/// `GettingHaircut`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum BarberStatus {
    #[default]
    Sleeping,
    /// Just finished a haircut with customers still waiting.
    Idle,
    Cutting,
}

impl BarberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BarberStatus::Sleeping => "sleeping",
            BarberStatus::Idle     => "idle",
            BarberStatus::Cutting  => "cutting",
        }
    }
}

impl fmt::Display for BarberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
