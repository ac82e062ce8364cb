//! Weighted grammar algebra
//!
//! A small acceptor language in the spirit of weighted finite-state
//! transducers: leaves consume spellings or insert values, combinators
//! concatenate, alternate, repeat, re-weight and rescale. Evaluation walks the
//! input left to right and keeps the cheapest candidate per offset, so the
//! result of [`Grammar::best_path`] is the minimum-weight parse that consumes
//! the whole phrase.
//!
//! # Example
//!
//! ```
//! use indic_itn_text_processing::grammar::{accept, insert, space, Grammar, Weight};
//!
//! // "hundred" alone means one hundred; "two hundred" is read elsewhere.
//! let hundred = insert(1).weighted(Weight(-1)).then(accept(["hundred"])).times(100);
//! let best = hundred.best_path("hundred").unwrap();
//! assert_eq!(best.reading.value, 100);
//! assert!(space().best_path("x").is_none());
//! ```

mod search;
mod weight;

pub use search::{Candidate, Frontier};
pub use weight::{Reading, Weight};

use indic_itn_config::SymbolTable;
use std::sync::Arc;

/// A weighted grammar over normalized text
#[derive(Debug, Clone)]
pub enum Grammar {
    /// Matches the empty string
    Epsilon,
    /// Consumes one of the spellings, contributing nothing
    Accept(Arc<[String]>),
    /// Consumes a table spelling and contributes its value
    Lookup(Arc<SymbolTable>),
    /// Contributes a value without consuming input
    Insert(u64),
    /// One space; optional unless `required`
    Space { required: bool },
    Concat(Vec<Grammar>),
    /// Alternatives, earlier ones winning weight ties
    Union(Vec<Grammar>),
    /// Between `min` and `max` repetitions of `inner`
    Closure {
        inner: Box<Grammar>,
        min: usize,
        max: usize,
    },
    Weighted { inner: Box<Grammar>, weight: Weight },
    /// Multiplies the value contributed by `inner`
    Scale { inner: Box<Grammar>, factor: u64 },
    /// Drops paths whose contributed value is zero
    NonZero(Box<Grammar>),
    /// Marks paths through `inner` as negative
    Negate(Box<Grammar>),
}

/// Consume any of `words`
pub fn accept<I, S>(words: I) -> Grammar
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let words: Vec<String> = words.into_iter().map(Into::into).collect();
    Grammar::Accept(words.into())
}

pub fn lookup(table: Arc<SymbolTable>) -> Grammar {
    Grammar::Lookup(table)
}

pub fn insert(value: u64) -> Grammar {
    Grammar::Insert(value)
}

/// Exactly one space
pub fn space() -> Grammar {
    Grammar::Space { required: true }
}

/// Zero or one space
pub fn delete_space() -> Grammar {
    Grammar::Space { required: false }
}

pub fn concat(parts: impl IntoIterator<Item = Grammar>) -> Grammar {
    parts
        .into_iter()
        .fold(Grammar::Concat(Vec::new()), Grammar::then)
}

pub fn union(alternatives: impl IntoIterator<Item = Grammar>) -> Grammar {
    alternatives
        .into_iter()
        .fold(Grammar::Union(Vec::new()), Grammar::or)
}

impl Grammar {
    pub fn then(self, next: Grammar) -> Grammar {
        match (self, next) {
            (Grammar::Concat(mut parts), Grammar::Concat(more)) => {
                parts.extend(more);
                Grammar::Concat(parts)
            },
            (Grammar::Concat(mut parts), next) => {
                parts.push(next);
                Grammar::Concat(parts)
            },
            (first, next) => Grammar::Concat(vec![first, next]),
        }
    }

    pub fn or(self, alternative: Grammar) -> Grammar {
        match self {
            Grammar::Union(mut alternatives) => {
                alternatives.push(alternative);
                Grammar::Union(alternatives)
            },
            first => Grammar::Union(vec![first, alternative]),
        }
    }

    pub fn repeat(self, min: usize, max: usize) -> Grammar {
        Grammar::Closure {
            inner: Box::new(self),
            min,
            max,
        }
    }

    pub fn optional(self) -> Grammar {
        self.repeat(0, 1)
    }

    pub fn weighted(self, weight: Weight) -> Grammar {
        Grammar::Weighted {
            inner: Box::new(self),
            weight,
        }
    }

    pub fn times(self, factor: u64) -> Grammar {
        Grammar::Scale {
            inner: Box::new(self),
            factor,
        }
    }

    pub fn non_zero(self) -> Grammar {
        Grammar::NonZero(Box::new(self))
    }

    pub fn negate(self) -> Grammar {
        Grammar::Negate(Box::new(self))
    }

    /// Number of nodes in the grammar tree
    pub fn rule_count(&self) -> usize {
        1 + match self {
            Grammar::Epsilon
            | Grammar::Accept(_)
            | Grammar::Lookup(_)
            | Grammar::Insert(_)
            | Grammar::Space { .. } => 0,
            Grammar::Concat(parts) | Grammar::Union(parts) => {
                parts.iter().map(Grammar::rule_count).sum()
            },
            Grammar::Closure { inner, .. }
            | Grammar::Weighted { inner, .. }
            | Grammar::Scale { inner, .. }
            | Grammar::NonZero(inner)
            | Grammar::Negate(inner) => inner.rule_count(),
        }
    }

    /// Cheapest path consuming all of `input`
    pub fn best_path(&self, input: &str) -> Option<Candidate> {
        self.advance(input, 0).at(input.len()).copied()
    }

    /// Every offset reachable from `start`, with the cheapest candidate for each
    pub fn advance(&self, input: &str, start: usize) -> Frontier {
        let Some(rest) = input.get(start..) else {
            return Frontier::default();
        };

        match self {
            Grammar::Epsilon => Frontier::single(Candidate::empty(start)),

            Grammar::Accept(words) => {
                let mut out = Frontier::default();
                for word in words.iter().filter(|w| rest.starts_with(w.as_str())) {
                    out.offer(Candidate::empty(start + word.len()));
                }
                out
            },

            Grammar::Lookup(table) => {
                let mut out = Frontier::default();
                for (spelling, value) in table.iter().filter(|(s, _)| rest.starts_with(s)) {
                    out.offer(Candidate {
                        end: start + spelling.len(),
                        reading: Reading::of(value),
                        weight: Weight::ZERO,
                    });
                }
                out
            },

            Grammar::Insert(value) => Frontier::single(Candidate {
                end: start,
                reading: Reading::of(*value),
                weight: Weight::ZERO,
            }),

            Grammar::Space { required } => {
                let mut out = Frontier::default();
                if rest.starts_with(' ') {
                    out.offer(Candidate::empty(start + 1));
                }
                if !required {
                    out.offer(Candidate::empty(start));
                }
                out
            },

            Grammar::Concat(parts) => {
                let mut frontier = Frontier::single(Candidate::empty(start));
                for part in parts {
                    frontier = step(&frontier, part, input);
                    if frontier.is_empty() {
                        break;
                    }
                }
                frontier
            },

            Grammar::Union(alternatives) => {
                let mut out = Frontier::default();
                for alternative in alternatives {
                    out.merge(alternative.advance(input, start));
                }
                out
            },

            Grammar::Closure { inner, min, max } => {
                let mut out = Frontier::default();
                let mut current = Frontier::single(Candidate::empty(start));
                if *min == 0 {
                    out.merge(current.clone());
                }
                for round in 1..=*max {
                    current = step(&current, inner, input);
                    if current.is_empty() {
                        break;
                    }
                    if round >= *min {
                        out.merge(current.clone());
                    }
                }
                out
            },

            Grammar::Weighted { inner, weight } => {
                inner.advance(input, start).filter_map(|mut c| {
                    c.weight += *weight;
                    Some(c)
                })
            },

            Grammar::Scale { inner, factor } => inner.advance(input, start).filter_map(|c| {
                Some(Candidate {
                    reading: c.reading.scaled(*factor)?,
                    ..c
                })
            }),

            Grammar::NonZero(inner) => inner
                .advance(input, start)
                .filter_map(|c| (c.reading.value != 0).then_some(c)),

            Grammar::Negate(inner) => inner.advance(input, start).filter_map(|c| {
                Some(Candidate {
                    reading: c.reading.negated(),
                    ..c
                })
            }),
        }
    }
}

/// Extend every candidate of `frontier` by one match of `next`
fn step(frontier: &Frontier, next: &Grammar, input: &str) -> Frontier {
    let mut out = Frontier::default();
    for head in frontier.iter() {
        for tail in next.advance(input, head.end) {
            if let Some(joined) = head.extend(&tail) {
                out.offer(joined);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indic_itn_config::TableKind;

    fn digits() -> Arc<SymbolTable> {
        let words = [
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
        ];
        Arc::new(SymbolTable::from_entries("digit", TableKind::Digit, words).unwrap())
    }

    #[test]
    fn test_lookup_requires_full_consumption() {
        let g = lookup(digits());
        assert_eq!(g.best_path("seven").map(|c| c.reading.value), Some(7));
        assert!(g.best_path("seven ").is_none());
        assert!(g.best_path("sevens").is_none());
    }

    #[test]
    fn test_concat_sums_segments() {
        let g = concat([
            lookup(digits()).times(10),
            space(),
            lookup(digits()),
        ]);
        assert_eq!(g.best_path("four two").map(|c| c.reading.value), Some(42));
        assert!(g.best_path("fourtwo").is_none());

        let fused = concat([lookup(digits()).times(10), delete_space(), lookup(digits())]);
        assert_eq!(fused.best_path("fourtwo").map(|c| c.reading.value), Some(42));
    }

    #[test]
    fn test_union_prefers_lower_weight() {
        let g = union([
            accept(["dozen"]).then(insert(12)),
            accept(["dozen"]).then(insert(13)).weighted(Weight(-1)),
        ]);
        assert_eq!(g.best_path("dozen").map(|c| c.reading.value), Some(13));
    }

    #[test]
    fn test_union_tie_goes_to_first() {
        let g = union([
            accept(["dozen"]).then(insert(12)),
            accept(["dozen"]).then(insert(13)),
        ]);
        assert_eq!(g.best_path("dozen").map(|c| c.reading.value), Some(12));
    }

    #[test]
    fn test_closure_bounds() {
        let g = accept(["ha"]).then(insert(1)).repeat(1, 3);
        assert_eq!(g.best_path("hahaha").map(|c| c.reading.value), Some(3));
        assert!(g.best_path("").is_none());
        assert!(g.best_path("hahahaha").is_none());

        let opt = accept(["x"]).optional();
        assert!(opt.best_path("").is_some());
        assert!(opt.best_path("x").is_some());
    }

    #[test]
    fn test_non_zero_and_negate() {
        let g = union([lookup(digits()), accept(["zero"])]).non_zero();
        assert!(g.best_path("zero").is_none());
        assert!(g.best_path("two").is_some());

        let signed = concat([accept(["minus"]), space()]).negate().optional().then(lookup(digits()));
        let best = signed.best_path("minus two").unwrap();
        assert!(best.reading.negative);
        assert_eq!(best.reading.value, 2);
        assert!(!signed.best_path("two").unwrap().reading.negative);
    }

    #[test]
    fn test_scale_overflow_drops_path() {
        let g = insert(u64::MAX).times(2).then(accept(["x"]));
        assert!(g.best_path("x").is_none());
    }

    #[test]
    fn test_rule_count() {
        let g = concat([lookup(digits()), space(), accept(["hundred"])]);
        assert_eq!(g.rule_count(), 4);
    }
}
