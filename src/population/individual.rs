//! Individual genome
//!
//! This module provides the fixed-length bit string genome evolved by the
//! algorithm.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::GenomeError;

/// Number of genes in every individual
pub const GENOME_LENGTH: usize = 64;

/// Fixed-length bit string genome
///
/// Genes are stored as `bool`, so every gene is a binary value and every
/// individual has exactly [`GENOME_LENGTH`] of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: [bool; GENOME_LENGTH],
}

impl Individual {
    /// Create an individual from an explicit gene array
    pub fn new(genes: [bool; GENOME_LENGTH]) -> Self {
        Self { genes }
    }

    /// Create an all-zeros individual
    pub fn zeros() -> Self {
        Self {
            genes: [false; GENOME_LENGTH],
        }
    }

    /// Create a random individual, one uniform draw per gene
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut genes = [false; GENOME_LENGTH];
        for gene in &mut genes {
            *gene = rng.gen();
        }
        Self { genes }
    }

    /// Create an individual from a u64, bit `i` becoming gene `i`
    pub fn from_u64(value: u64) -> Self {
        let mut genes = [false; GENOME_LENGTH];
        for (i, gene) in genes.iter_mut().enumerate() {
            *gene = (value >> i) & 1 == 1;
        }
        Self { genes }
    }

    /// Convert to a u64, gene `i` becoming bit `i`
    pub fn to_u64(&self) -> u64 {
        let mut value = 0u64;
        for (i, &gene) in self.genes.iter().enumerate() {
            if gene {
                value |= 1 << i;
            }
        }
        value
    }

    /// Get the gene at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= GENOME_LENGTH`.
    pub fn gene(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Set the gene at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= GENOME_LENGTH`.
    pub fn set_gene(&mut self, index: usize, value: bool) {
        self.genes[index] = value;
    }

    /// Number of genes
    pub fn size(&self) -> usize {
        self.genes.len()
    }

    /// The genes of this individual
    pub fn genes(&self) -> &[bool; GENOME_LENGTH] {
        &self.genes
    }

    /// Number of positions where the two genomes differ
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl Default for Individual {
    fn default() -> Self {
        Self::zeros()
    }
}

impl std::ops::Index<usize> for Individual {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl From<[bool; GENOME_LENGTH]> for Individual {
    fn from(genes: [bool; GENOME_LENGTH]) -> Self {
        Self { genes }
    }
}

impl<'a> IntoIterator for &'a Individual {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", if *gene { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Individual {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != GENOME_LENGTH {
            return Err(GenomeError::DimensionMismatch {
                expected: GENOME_LENGTH,
                actual,
            });
        }

        let mut genes = [false; GENOME_LENGTH];
        for (gene, c) in genes.iter_mut().zip(s.chars()) {
            *gene = match c {
                '0' => false,
                '1' => true,
                other => return Err(GenomeError::InvalidGene(other)),
            };
        }
        Ok(Self { genes })
    }
}

// Serialized as the `0`/`1` string, serde has no array impls past 32 elements.
impl Serialize for Individual {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Individual {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
