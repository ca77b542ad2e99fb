//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are small integers assigned by the record stores. Using newtype
//! wrappers prevents accidentally mixing up IDs from different entity types
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Common behaviour the record stores need from an id
pub trait RecordId: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// The raw integer value
    fn value(self) -> u32;

    /// Wrap a raw integer value
    fn from_value(value: u32) -> Self;
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl RecordId for $name {
            fn value(self) -> u32 {
                self.0
            }

            fn from_value(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");
define_id!(GoalId, "goal-");
define_id!(CategoryId, "cat-");
