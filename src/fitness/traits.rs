//! Fitness traits
//!
//! This module defines the fitness evaluation trait.

use crate::population::individual::Individual;

/// Fitness evaluation trait
///
/// Scores are non-negative integers, higher is better.
pub trait Fitness: Send + Sync {
    /// Score an individual
    fn score_fitness(&self, individual: &Individual) -> usize;

    /// The score of a perfect individual
    fn max_fitness(&self) -> usize;

    /// Check whether an individual reaches the maximum score
    fn is_optimal(&self, individual: &Individual) -> bool {
        self.score_fitness(individual) >= self.max_fitness()
    }
}

impl<F: Fitness + ?Sized> Fitness for &F {
    fn score_fitness(&self, individual: &Individual) -> usize {
        (**self).score_fitness(individual)
    }

    fn max_fitness(&self) -> usize {
        (**self).max_fitness()
    }
}
