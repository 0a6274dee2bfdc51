//! Fixed-length bit-string chromosome.

use rand::Rng;

/// A candidate solution encoded as a fixed-length bit string.
///
/// Chromosomes have value semantics: every operator that "modifies" a
/// chromosome returns a new one. The length is fixed at construction and
/// constant across a run (`dimensions * genes_per_dimension`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from raw bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a chromosome of `len` bits, each drawn independently and
    /// uniformly from {0, 1}.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let bits = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome has zero bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The underlying bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl FromIterator<bool> for Chromosome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
