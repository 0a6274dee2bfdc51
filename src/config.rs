//! Run configuration.
//!
//! [`RunConfig`] holds every tunable of a run. All fields are immutable
//! for the run's duration and shared read-only by every component.

use crate::error::ConfigError;
use crate::operators::Crossover;
use crate::selection::Selection;
use std::f64::consts::TAU;

/// Configuration for one optimization run.
///
/// Defaults reproduce the classic setup for this benchmark: a population
/// of 100 chromosomes of 4 dimensions x 5 bits, tournament-of-5 selection
/// for both parents, single-point crossover, and 1% mutation/inversion
/// rates over 100 generations.
///
/// # Builder Pattern
///
/// ```
/// use rastriga::{Crossover, RunConfig, Selection};
///
/// let config = RunConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Rank)
///     .with_crossover(Crossover::Uniform)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values verbatim; out-of-range values are rejected by
/// [`validate`](Self::validate) rather than silently clamped.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Rastrigin amplitude `A`.
    pub amplitude: f64,

    /// Rastrigin angular frequency `ω`.
    pub omega: f64,

    /// Number of individuals in the population.
    ///
    /// Must be even: the loop replaces the population two children at a
    /// time.
    pub population_size: usize,

    /// Number of bits encoding one coordinate. Must be in `1..=63`.
    pub genes_per_dimension: usize,

    /// Number of coordinates in the search space.
    pub dimensions: usize,

    /// Per-bit flip probability applied to every child.
    pub mutation_rate: f64,

    /// Per-child probability of one segment reversal.
    pub inversion_rate: f64,

    /// Number of generations to run. A pure iteration count: there is no
    /// convergence-based early exit. Zero is legal and reports nothing.
    pub generations: usize,

    /// Selection strategy for the first parent of each pair.
    pub parent1_selection: Selection,

    /// Selection strategy for the second parent of each pair.
    ///
    /// May differ from [`parent1_selection`](Self::parent1_selection);
    /// any pairing of strategies is valid.
    pub parent2_selection: Selection,

    /// Active crossover strategy.
    pub crossover: Crossover,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            omega: TAU * 20.0,
            population_size: 100,
            genes_per_dimension: 5,
            dimensions: 4,
            mutation_rate: 0.01,
            inversion_rate: 0.01,
            generations: 100,
            parent1_selection: Selection::default(),
            parent2_selection: Selection::default(),
            crossover: Crossover::default(),
            seed: None,
        }
    }
}

impl RunConfig {
    /// Sets the Rastrigin amplitude.
    pub fn with_amplitude(mut self, a: f64) -> Self {
        self.amplitude = a;
        self
    }

    /// Sets the Rastrigin angular frequency.
    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of bits per coordinate.
    pub fn with_genes_per_dimension(mut self, g: usize) -> Self {
        self.genes_per_dimension = g;
        self
    }

    /// Sets the number of dimensions.
    pub fn with_dimensions(mut self, d: usize) -> Self {
        self.dimensions = d;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-child inversion rate.
    pub fn with_inversion_rate(mut self, rate: f64) -> Self {
        self.inversion_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the same selection strategy for both parents.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.parent1_selection = sel;
        self.parent2_selection = sel;
        self
    }

    /// Sets a different selection strategy per parent.
    pub fn with_parent_selections(mut self, first: Selection, second: Selection) -> Self {
        self.parent1_selection = first;
        self.parent2_selection = second;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Chromosome length implied by this configuration:
    /// `dimensions * genes_per_dimension`.
    pub fn chromosome_length(&self) -> usize {
        self.dimensions * self.genes_per_dimension
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before any generation executes; a run with an
    /// invalid configuration never starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 || self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.dimensions == 0 {
            return Err(ConfigError::Dimensions(self.dimensions));
        }
        if self.genes_per_dimension == 0 || self.genes_per_dimension > 63 {
            return Err(ConfigError::GenesPerDimension(self.genes_per_dimension));
        }
        for (name, value) in [
            ("mutation_rate", self.mutation_rate),
            ("inversion_rate", self.inversion_rate),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        for selection in [self.parent1_selection, self.parent2_selection] {
            if let Selection::Tournament(k) = selection {
                if k == 0 {
                    return Err(ConfigError::EmptyTournament);
                }
                if k > self.population_size {
                    return Err(ConfigError::TournamentTooLarge {
                        size: k,
                        population: self.population_size,
                    });
                }
            }
        }
        if let Crossover::MultiPoint(points) = self.crossover {
            if points == 0 || points >= self.chromosome_length() {
                return Err(ConfigError::TooManyCutPoints {
                    points,
                    length: self.chromosome_length(),
                });
            }
        }
        Ok(())
    }
}
