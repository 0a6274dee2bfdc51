//! Selection strategies.
//!
//! Selection determines which individuals become parents for crossover.
//! The three strategies trade off selection pressure differently; all
//! assume **maximization** (higher fitness = better) and all have copy
//! semantics: selecting never removes or mutates the source population.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::individual::Individual;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use rastriga::Selection;
///
/// // Tournament with size 5 (the classic setup for this benchmark)
/// let sel = Selection::Tournament(5);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` individuals uniformly at random with
    /// replacement, return the fittest. Ties go to the first-encountered
    /// maximum.
    ///
    /// Higher `k` = stronger selection pressure; `k = 1` degenerates to
    /// uniform random selection.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Rastrigin fitness is non-positive, so raw fitness totals would
    /// break the wheel. Weights are the fitness values shifted by the
    /// population minimum; when the shifted wheel is degenerate (all
    /// fitness equal) the pick falls back to uniform random.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,

    /// Rank-based selection.
    ///
    /// The population is sorted ascending by fitness and rank `r`
    /// (worst = 1, best = N) is used as the selection weight, sidestepping
    /// the scaling problems of roulette selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(5)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

/// Tournament: k draws with replacement, keep the fittest seen.
fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        // Strict comparison: the first-encountered maximum wins ties.
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over min-shifted fitness weights.
///
/// weight_i = fitness_i - min_fitness, so the wheel is non-negative even
/// though Rastrigin fitness is at most 0.
fn roulette<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let min_fitness = population
        .iter()
        .map(Individual::fitness)
        .fold(f64::INFINITY, f64::min);

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| ind.fitness() - min_fitness)
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        // Degenerate wheel: every individual has the same fitness.
        return rng.random_range(0..n);
    }

    let spin = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= spin {
            return i;
        }
    }

    n - 1 // floating-point fallback: walk exhausted without reaching the spin
}

/// Rank selection: weight = rank on the ascending sort (worst = 1, best = N).
fn rank<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, ind)| (i, ind.fitness()))
        .collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let total = n * (n + 1) / 2;
    let spin = rng.random_range(0..total);
    let mut cumulative = 0usize;

    for (position, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += position + 1;
        if cumulative >= spin {
            return original_idx;
        }
    }

    indexed.last().expect("population has n >= 2 elements").0 // fallback
}
