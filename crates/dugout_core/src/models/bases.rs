//! Base occupancy and the simplified runner-advancement rules.
//!
//! Runners always move as far as the batter: a single or walk pushes every
//! runner up one base, a double pushes every runner up two. There is no
//! distinction between forced and unforced runners.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Bases {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

/// Result of advancing runners for one batted/awarded base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub bases: Bases,
    pub runs: u32,
}

impl Bases {
    pub const EMPTY: Bases = Bases { first: false, second: false, third: false };
    pub const LOADED: Bases = Bases { first: true, second: true, third: true };

    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self { first, second, third }
    }

    pub fn runner_count(&self) -> u8 {
        self.first as u8 + self.second as u8 + self.third as u8
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    /// Occupancy in base order (first, second, third).
    pub fn as_array(&self) -> [bool; 3] {
        [self.first, self.second, self.third]
    }

    /// Batter to first, every runner up one base.
    pub fn advance_one(self) -> Advance {
        Advance {
            bases: Bases { first: true, second: self.first, third: self.second },
            runs: self.third as u32,
        }
    }

    /// Batter to second, every runner up two bases.
    pub fn advance_two(self) -> Advance {
        Advance {
            bases: Bases { first: false, second: true, third: self.first },
            runs: self.second as u32 + self.third as u32,
        }
    }
}
