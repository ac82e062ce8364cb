//! Tagged cardinal token

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of the cardinal tagger
///
/// Renders as `cardinal { integer: "23" }`, or with a sign word present as
/// `cardinal { negative: "-" integer: "23" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardinalToken {
    /// Decimal digits without leading zeros ("0" for zero)
    pub integer: String,
    /// Sign marker, only present when the phrase carried a sign word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<String>,
}

impl CardinalToken {
    pub const NEGATIVE_MARKER: &'static str = "-";

    pub fn new(value: u64, negative: bool) -> Self {
        Self {
            integer: value.to_string(),
            negative: negative.then(|| Self::NEGATIVE_MARKER.to_string()),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative.is_some()
    }
}

impl fmt::Display for CardinalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.negative {
            Some(sign) => write!(
                f,
                "cardinal {{ negative: \"{}\" integer: \"{}\" }}",
                sign, self.integer
            ),
            None => write!(f, "cardinal {{ integer: \"{}\" }}", self.integer),
        }
    }
}
