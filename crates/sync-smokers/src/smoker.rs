use std::fmt;

use sync_core::SmokerId;

use crate::Ingredient;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum SmokerStatus {
    #[default]
    Waiting,
    Smoking,
    /// Retired from the round.  Part of the shared vocabulary for renderers;
    /// the state machine itself never moves a smoker here.
    Done,
}

impl SmokerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SmokerStatus::Waiting => "waiting",
            SmokerStatus::Smoking => "smoking",
            SmokerStatus::Done    => "done",
        }
    }
}

impl fmt::Display for SmokerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A smoker with an endless supply of one ingredient.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Smoker {
    pub id:     SmokerId,
    pub has:    Ingredient,
    pub status: SmokerStatus,
    /// Cigarettes finished since the last reset.
    pub smokes: u64,
}

impl Smoker {
    pub fn new(id: SmokerId, has: Ingredient) -> Self {
        Self { id, has, status: SmokerStatus::Waiting, smokes: 0 }
    }

    /// The two ingredients this smoker must get from the table.
    #[inline]
    pub fn needs(&self) -> [Ingredient; 2] {
        self.has.others()
    }

    /// The fixed cast: 1 has tobacco, 2 has paper, 3 has matches.
    pub fn roster() -> [Smoker; 3] {
        [
            Smoker::new(SmokerId(1), Ingredient::Tobacco),
            Smoker::new(SmokerId(2), Ingredient::Paper),
            Smoker::new(SmokerId(3), Ingredient::Matches),
        ]
    }
}
