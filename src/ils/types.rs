//! Core trait for Iterated Local Search over flip neighborhoods.

use crate::solution::Solution;
use rand::Rng;

/// Defines a problem searchable by flip-based iterated local search.
///
/// An instance holds static problem data fixed at construction and is
/// shared immutably across a run; evaluation writes only onto the
/// [`Solution`] passed in. Implementors provide the objective sense,
/// full evaluation, and (optionally) incremental single-flip scoring.
///
/// # Objective sense
///
/// All fitness comparisons in the engine go through
/// [`strictly_better`](IlsProblem::strictly_better) and
/// [`better_or_equal`](IlsProblem::better_or_equal), which are derived
/// from [`maximize`](IlsProblem::maximize) alone. No engine component
/// compares raw fitness values directly.
///
/// # Examples
///
/// ```
/// use lon_sampler::ils::IlsProblem;
/// use lon_sampler::solution::Solution;
///
/// /// Maximize the number of leading ones.
/// struct LeadingOnes {
///     n: usize,
/// }
///
/// impl IlsProblem for LeadingOnes {
///     fn dimension(&self) -> usize {
///         self.n
///     }
///
///     fn maximize(&self) -> bool {
///         true
///     }
///
///     fn full_eval(&self, sol: &mut Solution) {
///         assert_eq!(sol.len(), self.n);
///         sol.fitness = sol.values.iter().take_while(|&&v| v == 1).count() as i64;
///         sol.invalid = false;
///     }
/// }
/// ```
pub trait IlsProblem {
    /// Problem dimensionality: the required symbol-sequence length.
    fn dimension(&self) -> usize;

    /// True if higher fitness is better.
    fn maximize(&self) -> bool;

    /// Whether `a` is strictly better than `b` under the objective sense.
    fn strictly_better(&self, a: i64, b: i64) -> bool {
        if self.maximize() {
            a > b
        } else {
            a < b
        }
    }

    /// Whether `a` is at least as good as `b` under the objective sense.
    fn better_or_equal(&self, a: i64, b: i64) -> bool {
        if self.maximize() {
            a >= b
        } else {
            a <= b
        }
    }

    /// Recomputes `fitness` from scratch and clears the `invalid` flag.
    ///
    /// # Panics
    ///
    /// Panics if the solution's length differs from [`dimension`]
    /// (a caller/initialization bug, not a recoverable condition).
    ///
    /// [`dimension`]: IlsProblem::dimension
    fn full_eval(&self, sol: &mut Solution);

    /// Whether single-flip moves can be scored incrementally.
    ///
    /// Callers must check this before using
    /// [`flip_delta_eval`](IlsProblem::flip_delta_eval) or
    /// [`flip_with_delta`](IlsProblem::flip_with_delta).
    fn has_flip_delta_eval(&self) -> bool {
        false
    }

    /// Scores the flip at position `i` without mutating `sol`.
    ///
    /// Returns whether the flip improves the solution and the signed
    /// fitness change (adding it to the current fitness yields the
    /// flipped solution's fitness).
    ///
    /// # Panics
    ///
    /// Panics unless [`has_flip_delta_eval`](IlsProblem::has_flip_delta_eval)
    /// is true.
    fn flip_delta_eval(&self, _sol: &Solution, _i: usize) -> (bool, i64) {
        panic!("flip_delta_eval on a problem without incremental flip evaluation")
    }

    /// Commits the flip at `i`, adjusting `fitness` by `delta` in place
    /// and clearing the `invalid` flag. No full re-scan.
    ///
    /// # Panics
    ///
    /// Panics unless [`has_flip_delta_eval`](IlsProblem::has_flip_delta_eval)
    /// is true.
    fn flip_with_delta(&self, _sol: &mut Solution, _i: usize, _delta: i64) {
        panic!("flip_with_delta on a problem without incremental flip evaluation")
    }

    /// Perturbation: flips two distinct uniformly random positions and
    /// leaves the solution fully evaluated (`invalid` cleared).
    ///
    /// The default re-scores with a full evaluation; problems with
    /// incremental scoring can override to adjust the fitness directly.
    fn two_rnd_flips<R: Rng>(&self, sol: &mut Solution, rng: &mut R) {
        let (i, j) = distinct_pair(self.dimension(), rng);
        sol.flip(i);
        sol.flip(j);
        self.full_eval(sol);
    }
}

/// Samples two distinct uniform positions in `0..n`, resampling the
/// second until it differs from the first.
///
/// # Panics
///
/// Panics if `n < 2`.
pub(crate) fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "two distinct positions require dimension >= 2");
    let i = rng.random_range(0..n);
    let mut j = i;
    while j == i {
        j = rng.random_range(0..n);
    }
    (i, j)
}
