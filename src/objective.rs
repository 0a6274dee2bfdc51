//! Rastrigin objective and fitness evaluation.
//!
//! The Rastrigin function is a standard multimodal benchmark: a single
//! global minimum of 0 at the origin surrounded by a regular lattice of
//! local minima, chosen to stress the exploration/exploitation balance of
//! the operators.
//!
//! # References
//!
//! - Rastrigin (1974), *Systems of Extremal Control*
//! - Mühlenbein, Schomisch & Born (1991), "The Parallel Genetic Algorithm
//!   as Function Optimizer"

use crate::chromosome::Chromosome;
use crate::encoding::Encoding;

/// The n-dimensional Rastrigin function
/// `A·n + Σ(xᵢ² − A·cos(ω·xᵢ))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rastrigin {
    /// Amplitude `A` of the cosine modulation.
    pub amplitude: f64,
    /// Angular frequency `ω` of the cosine modulation.
    pub omega: f64,
}

impl Rastrigin {
    /// Creates the function with the given amplitude and angular frequency.
    pub fn new(amplitude: f64, omega: f64) -> Self {
        Self { amplitude, omega }
    }

    /// Evaluates the function at `x`.
    ///
    /// Zero at the origin, non-negative everywhere on the decode domain.
    pub fn value(&self, x: &[f64]) -> f64 {
        let a = self.amplitude;
        let n = x.len() as f64;
        a * n
            + x.iter()
                .map(|&xi| xi * xi - a * (self.omega * xi).cos())
                .sum::<f64>()
    }
}

/// Decodes chromosomes and scores them against the Rastrigin function.
///
/// Fitness is `-rastrigin(decode(c))`: the search is framed as
/// maximization so every selection operator uniformly prefers larger
/// values. Evaluation is pure and deterministic; randomness lives only
/// in the operators.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    /// Chromosome decoding scheme.
    pub encoding: Encoding,
    /// Objective function.
    pub rastrigin: Rastrigin,
}

impl Evaluator {
    /// Creates an evaluator.
    pub fn new(encoding: Encoding, rastrigin: Rastrigin) -> Self {
        Self {
            encoding,
            rastrigin,
        }
    }

    /// Fitness of a chromosome: the negated Rastrigin value of its
    /// decoded vector. Higher is better; the maximum attainable is 0.
    ///
    /// # Panics
    /// Panics if the chromosome length does not match the encoding.
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        -self.rastrigin.value(&self.encoding.decode(chromosome))
    }
}
