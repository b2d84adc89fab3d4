//! Item identifiers.
//!
//! Every [`crate::controller::Controller`] owns its own [`IdGenerator`], so ids
//! are unique and never reused within a controller, and two controllers built
//! the same way hand out the same sequence.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::FIRST_ITEM_ID;

/// Identifier of an item within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: FIRST_ITEM_ID }
    }
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence at `first` instead of the default.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Hand out the next unused id.
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}
