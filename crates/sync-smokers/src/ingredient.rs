use std::fmt;
use std::str::FromStr;

use crate::{SmokersError, SmokersResult};

/// One of the three things needed to roll a cigarette.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Ingredient {
    Tobacco,
    Paper,
    Matches,
}

impl Ingredient {
    pub const ALL: [Ingredient; 3] = [Ingredient::Tobacco, Ingredient::Paper, Ingredient::Matches];

    /// The two ingredients that are not `self`, in `ALL` order.
    pub fn others(self) -> [Ingredient; 2] {
        match self {
            Ingredient::Tobacco => [Ingredient::Paper, Ingredient::Matches],
            Ingredient::Paper   => [Ingredient::Tobacco, Ingredient::Matches],
            Ingredient::Matches => [Ingredient::Tobacco, Ingredient::Paper],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ingredient::Tobacco => "tobacco",
            Ingredient::Paper   => "paper",
            Ingredient::Matches => "matches",
        }
    }

    /// Parse a pair written as `a+b` or `a,b`, e.g. `tobacco+paper`.
    /// Both names must differ.
    pub fn parse_pair(s: &str) -> SmokersResult<[Ingredient; 2]> {
        let parts: Vec<&str> = s
            .split(['+', ','])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [a, b] => {
                let (a, b): (Ingredient, Ingredient) = (a.parse()?, b.parse()?);
                if a == b {
                    return Err(SmokersError::DuplicateIngredient(a));
                }
                Ok([a, b])
            }
            other  => Err(SmokersError::PairLength(other.len())),
        }
    }
}

impl FromStr for Ingredient {
    type Err = SmokersError;

    fn from_str(s: &str) -> SmokersResult<Ingredient> {
        Ingredient::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SmokersError::UnknownIngredient(s.to_owned()))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
