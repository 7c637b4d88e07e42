//! Iterated Local Search (ILS) over flip neighborhoods.
//!
//! A single-solution trajectory metaheuristic: hill-climb to a local
//! optimum, then repeatedly perturb the incumbent with two random
//! flips, re-optimize, and accept the new optimum when it is at least
//! as good. Every perturb-then-search cycle emits one basin transition
//! to a trajectory log, which downstream tooling assembles into a
//! local optima network.
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"
//! - Ochoa, Verel, Daolio & Tomassini (2014), "Local Optima Networks:
//!   A New Model of Combinatorial Fitness Landscapes"

mod climber;
mod config;
mod explorer;
mod runner;
mod types;

pub use climber::hill_climb;
pub use config::IlsConfig;
pub use explorer::explore_flips;
pub use runner::{IlsResult, IlsRunner};
pub use types::IlsProblem;

pub(crate) use types::distinct_pair;
