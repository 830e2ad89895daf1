//! Diagnostics and statistics
//!
//! This module provides per-generation statistics and the result of a run.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Fitness;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Best score in this generation
    pub best_fitness: usize,
    /// Worst score in this generation
    pub worst_fitness: usize,
    /// Mean score
    pub mean_fitness: f64,
    /// Mean pairwise Hamming distance
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from a population, `None` if it is empty
    pub fn from_population<Fit: Fitness + ?Sized>(
        population: &Population,
        fitness: &Fit,
        generation: usize,
    ) -> Option<Self> {
        let scores: Vec<usize> = population
            .iter()
            .map(|i| fitness.score_fitness(i))
            .collect();

        let best = *scores.iter().max()?;
        let worst = *scores.iter().min()?;
        let mean = scores.iter().sum::<usize>() as f64 / scores.len() as f64;

        Some(Self {
            generation,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            diversity: population.diversity(),
        })
    }
}

/// Result of a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Fittest individual of the final population
    pub best: Individual,
    /// Its score
    pub best_fitness: usize,
    /// Number of generations evolved
    pub generations: usize,
    /// Whether the target was matched exactly
    pub solved: bool,
    /// Reason for termination
    pub termination_reason: String,
}

impl EvolutionResult {
    /// Create a new result
    pub fn new(
        best: Individual,
        best_fitness: usize,
        generations: usize,
        solved: bool,
        termination_reason: impl Into<String>,
    ) -> Self {
        Self {
            best,
            best_fitness,
            generations,
            solved,
            termination_reason: termination_reason.into(),
        }
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} after {} generations (best fitness {})",
            self.termination_reason, self.generations, self.best_fitness
        )
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, GenerationStats};
}
