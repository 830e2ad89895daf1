//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::traits::Fitness;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Selection operator trait
///
/// Picks a parent from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    fn select<R: Rng, Fit: Fitness + ?Sized>(
        &self,
        population: &Population,
        fitness: &Fit,
        rng: &mut R,
    ) -> Result<Individual, OperatorError>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce one offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual;
}

/// Mutation operator trait
///
/// Applies random changes to an individual.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to an individual in place
    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R);
}
