//! Best-path bookkeeping
//!
//! A [`Frontier`] holds the cheapest way found so far to reach each input
//! offset. Because weights only add up, keeping one candidate per offset is
//! enough to recover the cheapest complete path.

use super::weight::{Reading, Weight};

/// One way of consuming the input up to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Byte offset just past the consumed text
    pub end: usize,
    pub reading: Reading,
    pub weight: Weight,
}

impl Candidate {
    pub fn empty(at: usize) -> Self {
        Self {
            end: at,
            reading: Reading::ZERO,
            weight: Weight::ZERO,
        }
    }

    /// Append a candidate that started where this one ends
    pub fn extend(&self, next: &Candidate) -> Option<Candidate> {
        Some(Candidate {
            end: next.end,
            reading: self.reading.combine(next.reading)?,
            weight: self.weight + next.weight,
        })
    }
}

/// Cheapest candidate per end offset, in first-reached order
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    candidates: Vec<Candidate>,
}

impl Frontier {
    pub fn single(candidate: Candidate) -> Self {
        Self {
            candidates: vec![candidate],
        }
    }

    /// Keep `candidate` if it is strictly cheaper than what reaches its offset
    ///
    /// On equal weight the earlier candidate stays, so alternatives declared
    /// first win ties.
    pub fn offer(&mut self, candidate: Candidate) {
        match self.candidates.iter_mut().find(|c| c.end == candidate.end) {
            Some(existing) if candidate.weight < existing.weight => *existing = candidate,
            Some(_) => {},
            None => self.candidates.push(candidate),
        }
    }

    pub fn merge(&mut self, other: Frontier) {
        for candidate in other.candidates {
            self.offer(candidate);
        }
    }

    pub fn at(&self, end: usize) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.end == end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Apply `f` to every candidate, dropping those it rejects
    pub fn filter_map(self, f: impl Fn(Candidate) -> Option<Candidate>) -> Frontier {
        let mut out = Frontier::default();
        for candidate in self.candidates.into_iter().filter_map(f) {
            out.offer(candidate);
        }
        out
    }
}

impl IntoIterator for Frontier {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}
