//! Chromosome-to-real-vector decoding.
//!
//! A chromosome of `dimensions * genes_per_dimension` bits is split into
//! `dimensions` contiguous genes; each gene is read as an unsigned base-2
//! integer (most significant bit first) and mapped linearly onto `[-1, 1]`.

use crate::chromosome::Chromosome;

/// Decoding scheme for a run.
///
/// Decoding is a pure function of the chromosome: the same chromosome
/// always decodes to bit-identical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encoding {
    /// Number of coordinates in a decoded vector.
    pub dimensions: usize,
    /// Number of bits encoding one coordinate.
    pub genes_per_dimension: usize,
}

impl Encoding {
    /// Creates an encoding.
    pub fn new(dimensions: usize, genes_per_dimension: usize) -> Self {
        Self {
            dimensions,
            genes_per_dimension,
        }
    }

    /// Expected chromosome length: `dimensions * genes_per_dimension`.
    pub fn chromosome_length(&self) -> usize {
        self.dimensions * self.genes_per_dimension
    }

    /// Decodes a chromosome into `dimensions` coordinates, each in `[-1, 1]`.
    ///
    /// The all-zero chromosome decodes to all `-1.0`, the all-one
    /// chromosome to all `+1.0`.
    ///
    /// # Panics
    /// Panics if the chromosome length does not equal
    /// [`chromosome_length`](Self::chromosome_length).
    pub fn decode(&self, chromosome: &Chromosome) -> Vec<f64> {
        assert_eq!(
            chromosome.len(),
            self.chromosome_length(),
            "chromosome length must equal dimensions * genes_per_dimension"
        );

        let g = self.genes_per_dimension;
        let span = (2f64).powi(g as i32) - 1.0;
        chromosome
            .bits()
            .chunks(g)
            .map(|gene| {
                let v = gene
                    .iter()
                    .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
                -1.0 + (2.0 / span) * v as f64
            })
            .collect()
    }
}
