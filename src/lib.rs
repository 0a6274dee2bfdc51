//! Binary-encoded genetic algorithm for the n-dimensional Rastrigin benchmark.
//!
//! Candidate solutions are fixed-length bit strings ([`Chromosome`]) decoded
//! into real vectors on `[-1, 1]^n` ([`Encoding`]) and scored against the
//! Rastrigin function ([`Rastrigin`], negated so that higher fitness is
//! better). The engine composes a pluggable operator library:
//!
//! - [`Selection`]: tournament, roulette (fitness-proportionate), and rank
//! - [`Crossover`]: single-point, two-point, multi-point, and uniform
//! - [`operators::mutate`] / [`operators::invert`]: per-bit flips and
//!   segment reversal
//!
//! # Key Types
//!
//! - [`RunConfig`]: all tunables for a run (rates, sizes, strategies, seed)
//! - [`GaRunner`]: executes the generational loop
//! - [`RunResult`]: best individual found plus per-generation reports
//!
//! # Reproducibility
//!
//! All randomness flows through a single seeded RNG owned by the runner and
//! threaded through every operator call; there is no global random source.
//! Two runs with the same [`RunConfig`] and seed produce identical results.
//!
//! # Example
//!
//! ```
//! use rastriga::{GaRunner, RunConfig};
//!
//! let config = RunConfig::default()
//!     .with_generations(20)
//!     .with_seed(42);
//! let result = GaRunner::run(&config).unwrap();
//! println!("best: {:?} = {}", result.best_vector, result.best_fitness);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Rastrigin (1974), *Systems of Extremal Control*

pub mod chromosome;
pub mod config;
pub mod encoding;
pub mod error;
pub mod individual;
pub mod objective;
pub mod operators;
pub mod rng;
pub mod runner;
pub mod selection;

pub use chromosome::Chromosome;
pub use config::RunConfig;
pub use encoding::Encoding;
pub use error::ConfigError;
pub use individual::Individual;
pub use objective::{Evaluator, Rastrigin};
pub use operators::Crossover;
pub use runner::{GaRunner, GenerationStats, RunResult};
pub use selection::Selection;
