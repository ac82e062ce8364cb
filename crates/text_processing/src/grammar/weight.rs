//! Path weights and the values carried along a path

use std::fmt;
use std::ops::{Add, AddAssign};

/// Additive path cost; lower is preferred
///
/// Integer units keep comparisons exact, so ties are real ties and resolve
/// by declaration order rather than by float noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Weight(pub i32);

impl Weight {
    pub const ZERO: Weight = Weight(0);
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value produced by a path: an integer plus the sign flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reading {
    pub value: u64,
    pub negative: bool,
}

impl Reading {
    pub const ZERO: Reading = Reading {
        value: 0,
        negative: false,
    };

    pub fn of(value: u64) -> Self {
        Self {
            value,
            negative: false,
        }
    }

    /// Sum of two consecutive segments; `None` on overflow
    pub fn combine(self, other: Reading) -> Option<Reading> {
        Some(Reading {
            value: self.value.checked_add(other.value)?,
            negative: self.negative || other.negative,
        })
    }

    pub fn scaled(self, factor: u64) -> Option<Reading> {
        Some(Reading {
            value: self.value.checked_mul(factor)?,
            negative: self.negative,
        })
    }

    pub fn negated(self) -> Reading {
        Reading {
            negative: true,
            ..self
        }
    }
}
