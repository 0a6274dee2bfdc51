//! The generational evolutionary loop.
//!
//! [`GaRunner`] drives the full cycle: initialize → evaluate → sort →
//! report → select → crossover → mutate → invert → replace, repeated for
//! exactly the configured number of generations.

use crate::chromosome::Chromosome;
use crate::config::RunConfig;
use crate::encoding::Encoding;
use crate::error::ConfigError;
use crate::individual::Individual;
use crate::objective::{Evaluator, Rastrigin};
use crate::operators::{invert, mutate};
use crate::rng::create_rng;

/// Per-generation report: the best individual of the sorted population
/// that is about to be replaced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Decoded coordinates of the generation's best chromosome.
    pub best_vector: Vec<f64>,
    /// Fitness of the generation's best chromosome (higher is better,
    /// 0 is the global optimum).
    pub best_fitness: f64,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The best individual observed across every generation and the
    /// final population.
    pub best: Individual,
    /// Decoded coordinates of [`best`](Self::best).
    pub best_vector: Vec<f64>,
    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,
    /// Number of generations executed.
    pub generations: usize,
    /// One report per generation, in generation order.
    pub history: Vec<GenerationStats>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use rastriga::{GaRunner, RunConfig};
///
/// let config = RunConfig::default().with_generations(10).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.history.len(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization.
    ///
    /// Fails fast with a [`ConfigError`] before any generation executes
    /// if the configuration is invalid.
    pub fn run(config: &RunConfig) -> Result<RunResult, ConfigError> {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs the optimization, invoking `observe` once per generation with
    /// that generation's report.
    ///
    /// The observer is the reporting collaborator: console printing,
    /// plotting, or collection are all the caller's choice. Reports are
    /// delivered in generation order, before the population is replaced.
    pub fn run_with_observer<F>(config: &RunConfig, mut observe: F) -> Result<RunResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let encoding = Encoding::new(config.dimensions, config.genes_per_dimension);
        let evaluator = Evaluator::new(encoding, Rastrigin::new(config.amplitude, config.omega));
        let chromosome_length = encoding.chromosome_length();

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| {
                Individual::evaluated(Chromosome::random(chromosome_length, &mut rng), &evaluator)
            })
            .collect();

        let mut history = Vec::with_capacity(config.generations);
        let mut best: Option<Individual> = None;

        for generation in 0..config.generations {
            // Elitist-by-sort ordering: best first.
            population.sort_by(|a, b| {
                b.fitness()
                    .partial_cmp(&a.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let gen_best = &population[0];
            let stats = GenerationStats {
                generation,
                best_vector: encoding.decode(gen_best.chromosome()),
                best_fitness: gen_best.fitness(),
            };
            log::debug!(
                "generation {}: {:?} = {}",
                stats.generation,
                stats.best_vector,
                stats.best_fitness
            );
            observe(&stats);
            history.push(stats);

            if best.as_ref().map_or(true, |b| gen_best.fitness() > b.fitness()) {
                best = Some(gen_best.clone());
            }

            let mut next_gen = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size / 2 {
                let p1 = &population[config.parent1_selection.select(&population, &mut rng)];
                let p2 = &population[config.parent2_selection.select(&population, &mut rng)];

                let (child1, child2) =
                    config
                        .crossover
                        .recombine(p1.chromosome(), p2.chromosome(), &mut rng);

                for child in [child1, child2] {
                    let child = mutate(&child, config.mutation_rate, &mut rng);
                    let child = invert(&child, config.inversion_rate, &mut rng);
                    next_gen.push(Individual::evaluated(child, &evaluator));
                }
            }

            // Wholesale replacement: no individual survives by identity.
            population = next_gen;
        }

        // The final population is never reported inside the loop; without
        // elitist copying its best may beat every reported one.
        let final_best = population
            .iter()
            .max_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("population is never empty");
        if best.as_ref().map_or(true, |b| final_best.fitness() > b.fitness()) {
            best = Some(final_best.clone());
        }

        let best = best.expect("at least the final population was examined");
        let best_vector = encoding.decode(best.chromosome());
        let best_fitness = best.fitness();
        log::info!(
            "run complete after {} generations: {:?} = {}",
            config.generations,
            best_vector,
            best_fitness
        );

        Ok(RunResult {
            best,
            best_vector,
            best_fitness,
            generations: config.generations,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Crossover;
    use crate::selection::Selection;
    use std::f64::consts::TAU;

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let config = RunConfig::default()
            .with_population_size(20)
            .with_generations(15)
            .with_seed(42);

        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();

        assert_eq!(a.history, b.history);
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_vector, b.best_vector);
    }

    #[test]
    fn test_single_generation_pipeline_reproducible() {
        // Minimal wiring check: one generation over a 4-chromosome
        // population must be byte-for-byte reproducible from the seed.
        let config = RunConfig::default()
            .with_dimensions(1)
            .with_genes_per_dimension(5)
            .with_population_size(4)
            .with_generations(1)
            .with_selection(Selection::Tournament(2))
            .with_crossover(Crossover::SinglePoint)
            .with_seed(7);

        assert!(config.validate().is_ok());

        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();

        assert_eq!(a.history.len(), 1);
        assert_eq!(a.history, b.history);
        assert_eq!(a.best.chromosome(), b.best.chromosome());
    }

    #[test]
    fn test_history_has_one_report_per_generation() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_generations(25)
            .with_seed(42);

        let result = GaRunner::run(&config).unwrap();

        assert_eq!(result.generations, 25);
        assert_eq!(result.history.len(), 25);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert_eq!(stats.best_vector.len(), config.dimensions);
        }
    }

    #[test]
    fn test_observer_sees_every_generation_in_order() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_generations(12)
            .with_seed(42);

        let mut seen = Vec::new();
        let result = GaRunner::run_with_observer(&config, |stats| {
            seen.push(stats.clone());
        })
        .unwrap();

        assert_eq!(seen, result.history);
    }

    #[test]
    fn test_zero_generations_reports_nothing() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_generations(0)
            .with_seed(42);

        let result = GaRunner::run(&config).unwrap();

        assert_eq!(result.generations, 0);
        assert!(result.history.is_empty());
        // Best comes from the initial population
        assert!(result.best_fitness <= 0.0);
        assert_eq!(result.best_vector.len(), config.dimensions);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = RunConfig::default().with_population_size(3);
        assert!(GaRunner::run(&config).is_err());
    }

    #[test]
    fn test_result_best_dominates_reported_history() {
        let config = RunConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(42);

        let result = GaRunner::run(&config).unwrap();
        for stats in &result.history {
            assert!(
                result.best_fitness >= stats.best_fitness,
                "run best {} beaten by generation {} ({})",
                result.best_fitness,
                stats.generation,
                stats.best_fitness
            );
        }
    }

    #[test]
    fn test_optimizes_smooth_rastrigin() {
        // Standard rastrigin (omega = 2*pi) in one dimension with a fine
        // encoding: the loop should land far above a random start.
        let config = RunConfig::default()
            .with_omega(TAU)
            .with_dimensions(1)
            .with_genes_per_dimension(10)
            .with_population_size(50)
            .with_generations(100)
            .with_seed(42);

        let result = GaRunner::run(&config).unwrap();

        assert!(
            result.best_fitness > -5.0,
            "expected near-optimal fitness, got {}",
            result.best_fitness
        );
        assert!(
            result.best_fitness >= result.history[0].best_fitness,
            "run best must be at least the initial generation's best"
        );
    }

    #[test]
    fn test_all_strategy_combinations_complete() {
        for selection in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            for crossover in [
                Crossover::SinglePoint,
                Crossover::TwoPoint,
                Crossover::MultiPoint(3),
                Crossover::Uniform,
            ] {
                let config = RunConfig::default()
                    .with_population_size(10)
                    .with_generations(5)
                    .with_selection(selection)
                    .with_crossover(crossover)
                    .with_seed(42);

                let result = GaRunner::run(&config).unwrap();
                assert_eq!(
                    result.history.len(),
                    5,
                    "{selection:?} + {crossover:?} did not complete"
                );
            }
        }
    }

    #[test]
    fn test_mixed_parent_selection_pairing() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_generations(5)
            .with_parent_selections(Selection::Tournament(3), Selection::Roulette)
            .with_seed(42);

        let result = GaRunner::run(&config).unwrap();
        assert_eq!(result.history.len(), 5);
    }
}
