//! 0/1 knapsack with a hard capacity: overweight selections score zero.

use crate::ils::IlsProblem;
use crate::solution::Solution;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One knapsack item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackItem {
    pub id: usize,
    pub value: i64,
    pub weight: i64,
}

/// A 0/1 knapsack instance. Bit `i` selects item `i`; the fitness is
/// the summed value of the selection, or 0 when its weight exceeds the
/// capacity. No incremental flip evaluation: the capacity cutoff makes
/// the fitness change of a flip depend on the whole selection.
#[derive(Debug, Clone)]
pub struct Knapsack {
    items: Vec<KnapsackItem>,
    capacity: i64,
}

impl Knapsack {
    pub fn new(items: Vec<KnapsackItem>, capacity: i64) -> Self {
        Self { items, capacity }
    }

    /// Reads an instance from a file in the `n` / `id value weight` /
    /// `capacity` line format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("cannot open knapsack instance {}", path.display()))?;
        Self::read(BufReader::new(file))
            .with_context(|| format!("malformed knapsack instance {}", path.display()))
    }

    /// Parses an instance from any buffered reader.
    ///
    /// Line 1 holds the item count `n`, lines 2..n+1 one whitespace-
    /// separated `id value weight` record each, line n+2 the capacity.
    pub fn read<R: BufRead>(input: R) -> Result<Self> {
        let mut lines = input.lines();

        let n: usize = lines
            .next()
            .context("missing item count line")??
            .trim()
            .parse()
            .context("invalid item count")?;

        let mut items = Vec::with_capacity(n);
        for k in 0..n {
            let line = lines
                .next()
                .with_context(|| format!("missing item record {} of {n}", k + 1))??;
            let fields: Vec<i64> = line
                .split_whitespace()
                .map(str::parse)
                .collect::<std::result::Result<_, _>>()
                .with_context(|| format!("invalid item record {line:?}"))?;
            if fields.len() != 3 {
                bail!("expected `id value weight` in item record {line:?}");
            }
            items.push(KnapsackItem {
                id: fields[0] as usize,
                value: fields[1],
                weight: fields[2],
            });
        }

        let capacity: i64 = lines
            .next()
            .context("missing capacity line")??
            .trim()
            .parse()
            .context("invalid capacity")?;

        Ok(Self { items, capacity })
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn items(&self) -> &[KnapsackItem] {
        &self.items
    }

    /// Total weight of the selected items, regardless of the capacity
    /// cutoff applied to the fitness.
    pub fn weight(&self, sol: &Solution) -> i64 {
        sol.values
            .iter()
            .zip(&self.items)
            .map(|(&v, item)| v as i64 * item.weight)
            .sum()
    }
}

impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Knapsack n={} c={}", self.items.len(), self.capacity)?;
        for item in &self.items {
            write!(f, " [{}, {}, {}]", item.id, item.value, item.weight)?;
        }
        Ok(())
    }
}

impl IlsProblem for Knapsack {
    fn dimension(&self) -> usize {
        self.items.len()
    }

    fn maximize(&self) -> bool {
        true
    }

    fn full_eval(&self, sol: &mut Solution) {
        assert_eq!(
            sol.len(),
            self.items.len(),
            "solution length {} does not match dimension {}",
            sol.len(),
            self.items.len()
        );
        let weight = self.weight(sol);
        sol.fitness = if weight > self.capacity {
            0
        } else {
            sol.values
                .iter()
                .zip(&self.items)
                .map(|(&v, item)| v as i64 * item.value)
                .sum()
        };
        sol.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn instance() -> Knapsack {
        Knapsack::new(
            vec![
                KnapsackItem {
                    id: 1,
                    value: 10,
                    weight: 5,
                },
                KnapsackItem {
                    id: 2,
                    value: 7,
                    weight: 4,
                },
                KnapsackItem {
                    id: 3,
                    value: 3,
                    weight: 2,
                },
            ],
            8,
        )
    }

    fn evaluated(problem: &Knapsack, values: Vec<usize>) -> Solution {
        let mut sol = Solution {
            values,
            fitness: 0,
            invalid: true,
        };
        problem.full_eval(&mut sol);
        sol
    }

    #[test]
    fn test_full_eval_within_capacity() {
        let problem = instance();
        let sol = evaluated(&problem, vec![1, 0, 1]);
        assert_eq!(sol.fitness, 13);
        assert_eq!(problem.weight(&sol), 7);
    }

    #[test]
    fn test_full_eval_overweight_scores_zero() {
        let problem = instance();
        let sol = evaluated(&problem, vec![1, 1, 1]);
        assert_eq!(sol.fitness, 0);
        // The weight helper still reports the raw selection weight.
        assert_eq!(problem.weight(&sol), 11);
    }

    #[test]
    fn test_no_delta_eval_capability() {
        let problem = instance();
        assert!(!problem.has_flip_delta_eval());
    }

    #[test]
    fn test_read_round_format() {
        let text = "3\n1 10 5\n2 7 4\n3 3 2\n8\n";
        let problem = Knapsack::read(Cursor::new(text)).unwrap();

        assert_eq!(problem.dimension(), 3);
        assert_eq!(problem.capacity(), 8);
        assert_eq!(
            problem.items()[1],
            KnapsackItem {
                id: 2,
                value: 7,
                weight: 4
            }
        );
    }

    #[test]
    fn test_read_missing_capacity() {
        let text = "2\n1 10 5\n2 7 4\n";
        let err = Knapsack::read(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_read_short_item_record() {
        let text = "1\n1 10\n4\n";
        assert!(Knapsack::read(Cursor::new(text)).is_err());
    }

    #[test]
    fn test_read_non_numeric() {
        let text = "1\n1 ten 5\n4\n";
        assert!(Knapsack::read(Cursor::new(text)).is_err());
    }

    #[test]
    fn test_display() {
        let problem = Knapsack::new(
            vec![KnapsackItem {
                id: 1,
                value: 2,
                weight: 3,
            }],
            4,
        );
        assert_eq!(problem.to_string(), "Knapsack n=1 c=4 [1, 2, 3]");
    }

    #[test]
    #[should_panic(expected = "does not match dimension")]
    fn test_dimension_mismatch_is_fatal() {
        let problem = instance();
        let mut sol = Solution {
            values: vec![0],
            fitness: 0,
            invalid: true,
        };
        problem.full_eval(&mut sol);
    }
}
