//! Magnitude tiers of the South-Asian numbering system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude tier named by a scale word
///
/// Variants are declared in ascending order so that the derived `Ord`
/// gives crore > lakh > thousand > hundred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hundred,
    Thousand,
    Lakh,
    Crore,
}

impl Tier {
    /// Tiers in the order they are spoken
    pub const DESCENDING: [Tier; 4] = [Self::Crore, Self::Lakh, Self::Thousand, Self::Hundred];

    /// Value of one unit of this tier
    pub fn multiplier(&self) -> u64 {
        match self {
            Self::Hundred => 100,
            Self::Thousand => 1_000,
            Self::Lakh => 100_000,
            Self::Crore => 10_000_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hundred => "hundred",
            Self::Thousand => "thousand",
            Self::Lakh => "lakh",
            Self::Crore => "crore",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Tier::Crore > Tier::Lakh);
        assert!(Tier::Lakh > Tier::Thousand);
        assert!(Tier::Thousand > Tier::Hundred);

        let mut sorted = Tier::DESCENDING;
        sorted.sort();
        sorted.reverse();
        assert_eq!(sorted, Tier::DESCENDING);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Tier::Hundred.multiplier(), 100);
        assert_eq!(Tier::Lakh.multiplier(), 100_000);
        assert_eq!(Tier::Crore.multiplier(), 10_000_000);
    }
}
