//! Recombination, mutation, and inversion operators.
//!
//! All operators are pure functions of their inputs and an RNG: they never
//! mutate the parent chromosomes and always return freshly built ones.
//! Both parents of any crossover must have equal length; mismatched
//! lengths are a contract violation, not a recoverable error.
//!
//! # Crossover Operators
//!
//! - [`Crossover::SinglePoint`]: one cut, swapped suffixes
//! - [`Crossover::TwoPoint`]: swapped middle segment
//! - [`Crossover::MultiPoint`]: k distinct cuts, alternating segments
//! - [`Crossover::Uniform`]: independent fair coin per position
//!
//! # Mutation Operators
//!
//! - [`mutate`]: independent per-bit flip with a fixed rate
//! - [`invert`]: whole-call Bernoulli draw, then inclusive segment reversal

use crate::chromosome::Chromosome;
use rand::Rng;

/// Crossover strategy producing two children from two parents.
///
/// Only one strategy is active in a run; the loop treats it as a pluggable
/// configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One cut index `c ∈ [0, len)`; children swap suffixes at `c`.
    SinglePoint,
    /// Two ordered cut indices; children swap the middle segment.
    TwoPoint,
    /// `k` distinct cut indices, sorted ascending; the contributing parent
    /// alternates per segment, parent1 feeding child1 first.
    ///
    /// Requires `1 <= k < len` (checked fail-fast by config validation).
    MultiPoint(usize),
    /// Fair coin per position: heads keeps each child aligned with its own
    /// parent, tails swaps the pair. `{child1[i], child2[i]}` always equals
    /// `{parent1[i], parent2[i]}` as a set.
    Uniform,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl Crossover {
    /// Recombines two parents into two children of the same length.
    ///
    /// # Panics
    /// Panics if the parents have different lengths or are empty, or if a
    /// [`MultiPoint`](Crossover::MultiPoint) strategy requests zero cut
    /// points or at least as many distinct cut points as there are bit
    /// positions.
    pub fn recombine<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");
        assert!(n > 0, "parents must not be empty");

        match self {
            Crossover::SinglePoint => single_point(parent1, parent2, rng),
            Crossover::TwoPoint => two_point(parent1, parent2, rng),
            Crossover::MultiPoint(k) => multi_point(parent1, parent2, *k, rng),
            Crossover::Uniform => uniform(parent1, parent2, rng),
        }
    }
}

/// Single-point crossover: cut at a uniform index in `[0, len)`.
fn single_point<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let cut = rng.random_range(0..parent1.len());
    splice(parent1, parent2, cut)
}

/// Exchanges suffixes at `cut`: child1 = p1[..cut] + p2[cut..] and the
/// complementary swap for child2. `cut == len` reproduces the parents.
fn splice(parent1: &Chromosome, parent2: &Chromosome, cut: usize) -> (Chromosome, Chromosome) {
    let p1 = parent1.bits();
    let p2 = parent2.bits();
    let child1 = p1[..cut].iter().chain(&p2[cut..]).copied().collect();
    let child2 = p2[..cut].iter().chain(&p1[cut..]).copied().collect();
    (child1, child2)
}

/// Two-point crossover: swap the segment `[p1, p2)` between two ordered
/// uniform indices.
fn two_point<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let p1 = parent1.bits();
    let p2 = parent2.bits();
    let child1 = p1[..start]
        .iter()
        .chain(&p2[start..end])
        .chain(&p1[end..])
        .copied()
        .collect();
    let child2 = p2[..start]
        .iter()
        .chain(&p1[start..end])
        .chain(&p2[end..])
        .copied()
        .collect();
    (child1, child2)
}

/// Multi-point crossover: `k` distinct sorted cuts, alternating which
/// parent contributes each segment.
fn multi_point<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    k: usize,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert!(k >= 1, "multi-point crossover needs at least one cut point");
    assert!(
        k < n,
        "cannot draw {k} distinct cut points from {n} positions"
    );

    let mut points = rand::seq::index::sample(rng, n, k).into_vec();
    points.sort_unstable();

    let p1 = parent1.bits();
    let p2 = parent2.bits();
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    let mut swapped = false;
    let mut start = 0;
    for &point in &points {
        let (src1, src2) = if swapped { (p2, p1) } else { (p1, p2) };
        child1.extend_from_slice(&src1[start..point]);
        child2.extend_from_slice(&src2[start..point]);
        start = point;
        swapped = !swapped;
    }
    let (src1, src2) = if swapped { (p2, p1) } else { (p1, p2) };
    child1.extend_from_slice(&src1[start..]);
    child2.extend_from_slice(&src2[start..]);

    (Chromosome::from_bits(child1), Chromosome::from_bits(child2))
}

/// Uniform crossover: independent fair coin per bit position.
fn uniform<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    let p1 = parent1.bits();
    let p2 = parent2.bits();
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    for i in 0..n {
        if rng.random_bool(0.5) {
            child1.push(p1[i]);
            child2.push(p2[i]);
        } else {
            child1.push(p2[i]);
            child2.push(p1[i]);
        }
    }

    (Chromosome::from_bits(child1), Chromosome::from_bits(child2))
}

/// Flips each bit independently with probability `rate`.
///
/// `rate = 0.0` returns the chromosome unchanged; `rate = 1.0` flips
/// every bit.
///
/// # Panics
/// Panics if `rate` is not in `[0, 1]`.
pub fn mutate<R: Rng>(chromosome: &Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    chromosome
        .bits()
        .iter()
        .map(|&bit| if rng.random_bool(rate) { !bit } else { bit })
        .collect()
}

/// With probability `rate` (one draw per call), reverses the bits between
/// two uniformly drawn indices, inclusive at both ends. Otherwise returns
/// the chromosome unchanged.
///
/// # Panics
/// Panics if `rate` is not in `[0, 1]`.
pub fn invert<R: Rng>(chromosome: &Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    // The probability draw comes first so the RNG stream is identical for
    // every chromosome length.
    if !rng.random_bool(rate) || chromosome.is_empty() {
        return chromosome.clone();
    }

    let (start, end) = random_segment(chromosome.len(), rng);
    let mut bits = chromosome.bits().to_vec();
    bits[start..=end].reverse();
    Chromosome::from_bits(bits)
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
