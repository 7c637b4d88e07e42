//! Built-in benchmark problems.
//!
//! Three bitstring problems spanning the evaluation capabilities of the
//! engine: [`OneMax`] (maximizing, incremental flip scoring),
//! [`Knapsack`] (maximizing, full evaluation only), and
//! [`NumberPartitioning`] (minimizing, full evaluation only).

mod knapsack;
mod number_partitioning;
mod one_max;

pub use knapsack::{Knapsack, KnapsackItem};
pub use number_partitioning::NumberPartitioning;
pub use one_max::OneMax;
