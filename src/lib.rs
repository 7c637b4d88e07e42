//! Iterated local search sampler for local optima networks.
//!
//! Samples the basin-to-basin structure of small combinatorial fitness
//! landscapes: hill climbing over the single-flip neighborhood (first
//! or best improvement, with incremental move scoring where the problem
//! supports it), wrapped in an iterated local search that perturbs the
//! incumbent with two random flips and records every
//! `(incumbent, new local optimum)` transition. The trajectory logs are
//! edge lists for Local Optima Network analysis.
//!
//! # Architecture
//!
//! - [`solution`]: the candidate representation (symbols, fitness,
//!   staleness flag).
//! - [`ils`]: the search engine — problem capability trait,
//!   flip-neighborhood explorer, hill climber, and the ILS runner.
//! - [`problems`]: built-in bitstring benchmarks (OneMax, 0/1 knapsack,
//!   number partitioning).
//! - [`trajectory`]: the append-only transition log.
//!
//! The engine targets research instances of tens of variables sampled
//! many times for statistical analysis; it is sequential by design and
//! fully reproducible from a seed.

pub mod ils;
pub mod problems;
pub mod solution;
pub mod trajectory;
