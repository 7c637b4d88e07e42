//! Two-way number partitioning.

use crate::ils::IlsProblem;
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A number partitioning instance: split `n` magnitudes into two sets
/// minimizing the absolute difference of their sums. Bit `i` assigns
/// magnitude `i` to one of the two sides.
///
/// Magnitudes are drawn uniformly from `1..=round(2^(n*k))` by a
/// generator seeded with `seed`, so an instance is fully determined by
/// `(n, k, seed)`. The parameter `k` controls the magnitude range
/// relative to `n`; around `k = 1` instances cross the easy/hard phase
/// transition.
#[derive(Debug, Clone)]
pub struct NumberPartitioning {
    n: usize,
    k: f64,
    seed: u64,
    magnitudes: Vec<i64>,
}

impl NumberPartitioning {
    pub fn new(n: usize, k: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let upper = (2f64.powf(n as f64 * k)).round().max(1.0) as i64;
        let magnitudes = (0..n).map(|_| rng.random_range(1..=upper)).collect();
        Self {
            n,
            k,
            seed,
            magnitudes,
        }
    }

    pub fn magnitudes(&self) -> &[i64] {
        &self.magnitudes
    }
}

impl fmt::Display for NumberPartitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NPP n={} k={} seed={}", self.n, self.k, self.seed)?;
        for m in &self.magnitudes {
            write!(f, " {m}")?;
        }
        Ok(())
    }
}

impl IlsProblem for NumberPartitioning {
    fn dimension(&self) -> usize {
        self.n
    }

    fn maximize(&self) -> bool {
        false
    }

    fn full_eval(&self, sol: &mut Solution) {
        assert_eq!(
            sol.len(),
            self.n,
            "solution length {} does not match dimension {}",
            sol.len(),
            self.n
        );
        let mut side0 = 0i64;
        let mut side1 = 0i64;
        for (&v, &m) in sol.values.iter().zip(&self.magnitudes) {
            if v == 0 {
                side0 += m;
            } else {
                side1 += m;
            }
        }
        sol.fitness = (side0 - side1).abs();
        sol.invalid = false;
    }
}
