use thiserror::Error;

use crate::Ingredient;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmokersError {
    #[error("the table already holds {0} + {1}")]
    TableOccupied(Ingredient, Ingredient),

    #[error("a pair needs two different ingredients, got {0} twice")]
    DuplicateIngredient(Ingredient),

    #[error("expected two ingredients, got {0}")]
    PairLength(usize),

    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),
}

pub type SmokersResult<T> = Result<T, SmokersError>;
