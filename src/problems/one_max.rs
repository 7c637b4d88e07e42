//! OneMax: maximize the number of ones in a bitstring.

use crate::ils::{distinct_pair, IlsProblem};
use crate::solution::Solution;
use rand::Rng;

/// The OneMax benchmark problem. Fitness is the bit count, so every
/// single flip has a known ±1 delta and the incremental evaluation
/// path applies.
#[derive(Debug, Clone)]
pub struct OneMax {
    n: usize,
}

impl OneMax {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl IlsProblem for OneMax {
    fn dimension(&self) -> usize {
        self.n
    }

    fn maximize(&self) -> bool {
        true
    }

    fn full_eval(&self, sol: &mut Solution) {
        assert_eq!(
            sol.len(),
            self.n,
            "solution length {} does not match dimension {}",
            sol.len(),
            self.n
        );
        sol.fitness = sol.values.iter().map(|&v| v as i64).sum();
        sol.invalid = false;
    }

    fn has_flip_delta_eval(&self) -> bool {
        true
    }

    fn flip_delta_eval(&self, sol: &Solution, i: usize) -> (bool, i64) {
        let delta = if sol.values[i] == 0 { 1 } else { -1 };
        (delta > 0, delta)
    }

    fn flip_with_delta(&self, sol: &mut Solution, i: usize, delta: i64) {
        sol.fitness += delta;
        sol.flip(i);
        sol.invalid = false;
    }

    fn two_rnd_flips<R: Rng>(&self, sol: &mut Solution, rng: &mut R) {
        let (i, j) = distinct_pair(self.n, rng);
        let delta = self.flip_delta_eval(sol, i).1 + self.flip_delta_eval(sol, j).1;
        sol.flip(i);
        sol.flip(j);
        sol.fitness += delta;
        sol.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluated(values: Vec<usize>) -> (OneMax, Solution) {
        let problem = OneMax::new(values.len());
        let mut sol = Solution {
            values,
            fitness: 0,
            invalid: true,
        };
        problem.full_eval(&mut sol);
        (problem, sol)
    }

    #[test]
    fn test_full_eval_counts_ones() {
        let (_, sol) = evaluated(vec![1, 0, 1, 1, 0]);
        assert_eq!(sol.fitness, 3);
        assert!(!sol.invalid);
    }

    #[test]
    fn test_flip_delta_signs() {
        let (problem, sol) = evaluated(vec![1, 0]);
        assert_eq!(problem.flip_delta_eval(&sol, 0), (false, -1));
        assert_eq!(problem.flip_delta_eval(&sol, 1), (true, 1));
    }

    #[test]
    fn test_flip_with_delta_commits() {
        let (problem, mut sol) = evaluated(vec![1, 0, 0]);
        let (_, delta) = problem.flip_delta_eval(&sol, 1);

        problem.flip_with_delta(&mut sol, 1, delta);

        assert_eq!(sol.values, vec![1, 1, 0]);
        assert_eq!(sol.fitness, 2);
        assert!(!sol.invalid);
    }

    #[test]
    #[should_panic(expected = "does not match dimension")]
    fn test_dimension_mismatch_is_fatal() {
        let problem = OneMax::new(4);
        let mut sol = Solution {
            values: vec![0, 1],
            fitness: 0,
            invalid: true,
        };
        problem.full_eval(&mut sol);
    }

    #[test]
    fn test_two_rnd_flips_adjusts_incrementally() {
        let problem = OneMax::new(8);
        let mut rng = StdRng::seed_from_u64(17);
        let (_, mut sol) = evaluated(vec![1, 1, 0, 0, 1, 0, 1, 1]);

        for _ in 0..50 {
            let before = sol.clone();
            problem.two_rnd_flips(&mut sol, &mut rng);

            assert!(!sol.invalid);
            let ones: i64 = sol.values.iter().map(|&v| v as i64).sum();
            assert_eq!(sol.fitness, ones);
            let changed = sol
                .values
                .iter()
                .zip(&before.values)
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2);
        }
    }

    proptest! {
        #[test]
        fn prop_delta_eval_matches_full_eval(
            values in proptest::collection::vec(0usize..=1, 1..40),
            idx in any::<prop::sample::Index>(),
        ) {
            let i = idx.index(values.len());
            let (problem, sol) = evaluated(values);

            let (improving, delta) = problem.flip_delta_eval(&sol, i);

            let mut flipped = sol.clone();
            flipped.flip(i);
            problem.full_eval(&mut flipped);

            prop_assert_eq!(sol.fitness + delta, flipped.fitness);
            prop_assert_eq!(
                improving,
                problem.strictly_better(flipped.fitness, sol.fitness)
            );
        }

        #[test]
        fn prop_two_rnd_flips_preserves_evaluation(
            values in proptest::collection::vec(0usize..=1, 2..40),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (problem, mut sol) = evaluated(values);

            problem.two_rnd_flips(&mut sol, &mut rng);

            let ones: i64 = sol.values.iter().map(|&v| v as i64).sum();
            prop_assert!(!sol.invalid);
            prop_assert_eq!(sol.fitness, ones);
        }
    }
}
