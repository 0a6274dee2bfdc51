//! Configuration error taxonomy.

use thiserror::Error;

/// A configuration violation detected before any generation executes.
///
/// The engine fails fast on these: values are never silently clamped
/// into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population must be replaced two children at a time.
    #[error("population_size must be even and at least 2, got {0}")]
    PopulationSize(usize),

    /// A tournament of zero draws cannot pick anything.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// Tournament draws are with replacement, but a tournament larger
    /// than the population guarantees duplicate draws dominate.
    #[error("tournament size {size} exceeds population size {population}")]
    TournamentTooLarge {
        /// Configured tournament size.
        size: usize,
        /// Configured population size.
        population: usize,
    },

    /// The decode accumulator is a `u64`.
    #[error("genes_per_dimension must be in 1..=63, got {0}")]
    GenesPerDimension(usize),

    /// A zero-dimensional search space has nothing to optimize.
    #[error("dimensions must be at least 1, got {0}")]
    Dimensions(usize),

    /// Probabilities must be valid.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Which rate field was out of range.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Multi-point crossover draws cut indices without replacement.
    #[error("multi-point crossover with {points} cut points needs a chromosome longer than {points} bits, got {length}")]
    TooManyCutPoints {
        /// Requested number of distinct cut points.
        points: usize,
        /// Chromosome length in bits.
        length: usize,
    },
}
