//! Flip-neighborhood exploration.

use super::types::IlsProblem;
use crate::solution::Solution;
use rand::seq::SliceRandom;
use rand::Rng;

/// Searches the single-flip neighborhood of `sol` for an improving move.
///
/// Under first improvement the positions are scanned in uniformly
/// random order and the scan stops at the first improving flip. Under
/// best improvement every position is scored in index order and the
/// most improving flip wins (ties keep the earlier position).
///
/// Flips are scored incrementally when the problem supports it,
/// otherwise by fully evaluating an independent flipped copy. The
/// winning move is materialized on a clone; `sol` itself is never
/// mutated.
///
/// Returns `None` when no flip improves `sol` — `sol` is then a local
/// optimum of the flip neighborhood (trivially so for `n == 0`).
pub fn explore_flips<P: IlsProblem, R: Rng>(
    sol: &Solution,
    problem: &P,
    first_improvement: bool,
    rng: &mut R,
) -> Option<Solution> {
    let mut indices: Vec<usize> = (0..sol.len()).collect();
    if first_improvement {
        indices.shuffle(rng);
    }

    if problem.has_flip_delta_eval() {
        let mut best: Option<(usize, i64)> = None;
        for &i in &indices {
            let (improving, delta) = problem.flip_delta_eval(sol, i);
            if !improving {
                continue;
            }
            let replaces = match best {
                Some((_, best_delta)) => problem.strictly_better(delta, best_delta),
                None => true,
            };
            if replaces {
                best = Some((i, delta));
            }
            if first_improvement {
                break;
            }
        }
        best.map(|(i, delta)| {
            let mut next = sol.clone();
            problem.flip_with_delta(&mut next, i, delta);
            next
        })
    } else {
        let mut best: Option<Solution> = None;
        for &i in &indices {
            let mut candidate = sol.clone();
            candidate.flip(i);
            problem.full_eval(&mut candidate);
            if !problem.strictly_better(candidate.fitness, sol.fitness) {
                continue;
            }
            let replaces = match &best {
                Some(b) => problem.strictly_better(candidate.fitness, b.fitness),
                None => true,
            };
            if replaces {
                best = Some(candidate);
            }
            if first_improvement {
                break;
            }
        }
        best
    }
}
