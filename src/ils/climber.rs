//! Hill climbing to a flip-neighborhood local optimum.

use super::explorer::explore_flips;
use super::types::IlsProblem;
use crate::solution::Solution;
use rand::Rng;

/// Climbs from `initial` by repeated neighborhood exploration until no
/// single-flip move improves, returning the resulting local optimum.
///
/// Every intermediate step strictly improves on its predecessor, so the
/// result is at least as good as `initial` and the loop terminates (a
/// bounded objective cannot improve forever).
pub fn hill_climb<P: IlsProblem, R: Rng>(
    initial: Solution,
    problem: &P,
    first_improvement: bool,
    rng: &mut R,
) -> Solution {
    let mut current = initial;
    while let Some(improved) = explore_flips(&current, problem, first_improvement, rng) {
        current = improved;
    }
    current
}
