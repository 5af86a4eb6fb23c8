//! Strongly typed identifier wrappers.
//!
//! Customer ids are handed out sequentially by the barber shop and never
//! reused within a run; smoker ids are fixed at 1..=3.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id that follows `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// Sequential customer number, starting at 1 after every reset.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Fixed smoker number in `1..=3`.
    pub struct SmokerId(u8);
}

impl CustomerId {
    /// The first id issued after construction or reset.
    pub const FIRST: CustomerId = CustomerId(1);
}
