//! Candidate solution representation.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A candidate solution: an ordered sequence of discrete symbols plus
/// its fitness under the owning problem instance.
///
/// `values` holds 0/1 symbols for bitstring problems or a permutation
/// of `0..n` for ordering problems. `fitness` is meaningful only while
/// `invalid` is false; any mutation of `values` that has not been
/// re-scored must leave `invalid` set.
///
/// Cloning yields a deep, independent copy — every branch point that
/// must preserve the current candidate clones explicitly before
/// mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Symbol sequence (bits or permutation elements).
    pub values: Vec<usize>,

    /// Objective value of `values`; stale while `invalid` is set.
    pub fitness: i64,

    /// True when `values` changed since the last evaluation.
    pub invalid: bool,
}

impl Solution {
    /// Creates an empty, evaluated solution of length zero.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            fitness: 0,
            invalid: false,
        }
    }

    /// Creates a uniformly random bitstring of length `n`.
    ///
    /// The result is unevaluated (`invalid` is set); callers score it
    /// with the owning problem's `full_eval`.
    pub fn rnd_bitstring<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            values: (0..n).map(|_| rng.random_range(0..=1)).collect(),
            fitness: 0,
            invalid: true,
        }
    }

    /// Creates a uniformly random permutation of `0..n`, unevaluated.
    pub fn rnd_permutation<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut values: Vec<usize> = (0..n).collect();
        values.shuffle(rng);
        Self {
            values,
            fitness: 0,
            invalid: true,
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Toggles the 0/1 symbol at position `i` and marks the fitness stale.
    pub fn flip(&mut self, i: usize) {
        self.values[i] = 1 - self.values[i];
        self.invalid = true;
    }
}

impl fmt::Display for Solution {
    /// Renders as `"<fitness> <symbols>"`, with an `(invalid)` marker
    /// when the fitness is stale. Symbols are concatenated without
    /// separators; this is the rendering consumed by trajectory logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fitness)?;
        if self.invalid {
            write!(f, " (invalid) ")?;
        } else {
            write!(f, " ")?;
        }
        for v in &self.values {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
