//! Tagger trait
//!
//! Number-class taggers (cardinal here; ordinal, decimal, money elsewhere in a
//! full pipeline) share this interface so a driver can try them in turn.

use crate::token::CardinalToken;
use crate::Language;

/// A compiled, immutable recognizer for one number class and one language
///
/// Implementations must be cheap to share: applying a tagger never mutates it,
/// so a single instance serves concurrent callers behind an `Arc`.
pub trait Tagger: Send + Sync {
    /// Number class this tagger recognizes (e.g. "cardinal")
    fn name(&self) -> &str;

    /// Language the tagger was built for
    fn language(&self) -> Language;

    /// Parse a complete phrase; `None` means "not a phrase of this class"
    fn tag(&self, phrase: &str) -> Option<CardinalToken>;

    /// Parse and render the tagged token string
    fn apply(&self, phrase: &str) -> Option<String> {
        self.tag(phrase).map(|token| token.to_string())
    }
}
