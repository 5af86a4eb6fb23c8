//! The shared table.
//!
//! The table is either empty or holds exactly two different ingredients.
//! A one-ingredient table is unrepresentable: the only way on is
//! [`Table::place`], which takes a whole pair.

use std::fmt;

use crate::{Ingredient, SmokersError, SmokersResult};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Table {
    pair: Option<[Ingredient; 2]>,
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table already holding `pair`, which must name two different
    /// ingredients.
    pub(crate) fn holding(pair: [Ingredient; 2]) -> Self {
        debug_assert_ne!(pair[0], pair[1]);
        Self { pair: Some(pair) }
    }

    /// Put `pair` on an empty table.
    pub fn place(&mut self, pair: [Ingredient; 2]) -> SmokersResult<()> {
        if let Some([a, b]) = self.pair {
            return Err(SmokersError::TableOccupied(a, b));
        }
        if pair[0] == pair[1] {
            return Err(SmokersError::DuplicateIngredient(pair[0]));
        }
        self.pair = Some(pair);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.pair = None;
    }

    /// The two ingredients, in the order they were placed.
    pub fn contents(&self) -> Option<[Ingredient; 2]> {
        self.pair
    }

    pub fn is_empty(&self) -> bool {
        self.pair.is_none()
    }

    /// Always 0 or 2.
    pub fn len(&self) -> usize {
        if self.pair.is_some() { 2 } else { 0 }
    }

    /// `true` if the table holds exactly `needs`, in either order.
    pub fn satisfies(&self, needs: [Ingredient; 2]) -> bool {
        match self.pair {
            Some([a, b]) => (a == needs[0] && b == needs[1]) || (a == needs[1] && b == needs[0]),
            None         => false,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair {
            Some([a, b]) => write!(f, "{a} + {b}"),
            None         => f.write_str("empty"),
        }
    }
}
