//! Chromosome paired with its cached fitness.

use crate::chromosome::Chromosome;
use crate::objective::Evaluator;

/// A chromosome together with its fitness, evaluated at construction.
///
/// Both fields are private and the only constructor evaluates the
/// chromosome, so a stale cached fitness next to a new chromosome is
/// unrepresentable: any chromosome produced by crossover, mutation, or
/// inversion must pass through [`Individual::evaluated`] again.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

impl Individual {
    /// Pairs a chromosome with its freshly computed fitness.
    ///
    /// # Panics
    /// Panics if the chromosome length does not match the evaluator's
    /// encoding.
    pub fn evaluated(chromosome: Chromosome, evaluator: &Evaluator) -> Self {
        let fitness = evaluator.fitness(&chromosome);
        Self {
            chromosome,
            fitness,
        }
    }

    /// The chromosome.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Cached fitness (higher is better).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the individual, returning its chromosome.
    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::objective::Rastrigin;
    use crate::rng::create_rng;
    use std::f64::consts::TAU;

    fn evaluator() -> Evaluator {
        Evaluator::new(Encoding::new(4, 5), Rastrigin::new(10.0, TAU * 20.0))
    }

    #[test]
    fn test_fitness_matches_evaluator() {
        let eval = evaluator();
        let mut rng = create_rng(42);
        let c = Chromosome::random(20, &mut rng);
        let ind = Individual::evaluated(c.clone(), &eval);
        assert_eq!(ind.fitness(), eval.fitness(&c));
        assert_eq!(ind.chromosome(), &c);
    }

    #[test]
    fn test_into_chromosome_round_trips() {
        let eval = evaluator();
        let mut rng = create_rng(42);
        let c = Chromosome::random(20, &mut rng);
        let ind = Individual::evaluated(c.clone(), &eval);
        assert_eq!(ind.into_chromosome(), c);
    }
}
