//! Royal Road fitness
//!
//! Scores individuals by how many genes they share with a hidden target.

use crate::fitness::traits::Fitness;
use crate::population::individual::{Individual, GENOME_LENGTH};

/// Hamming-similarity scorer bound to a fixed target genome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitnessCalculator {
    solution: Individual,
}

impl FitnessCalculator {
    /// Create a calculator for the given target
    pub fn new(solution: Individual) -> Self {
        Self { solution }
    }

    /// The target genome
    pub fn solution(&self) -> &Individual {
        &self.solution
    }
}

impl Fitness for FitnessCalculator {
    fn score_fitness(&self, individual: &Individual) -> usize {
        self.solution
            .genes()
            .iter()
            .zip(individual.genes().iter())
            .filter(|(target, gene)| target == gene)
            .count()
    }

    fn max_fitness(&self) -> usize {
        GENOME_LENGTH
    }
}
