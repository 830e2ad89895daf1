//! Termination criteria
//!
//! This module provides the termination criteria checked by the run loop.

/// Evolution state for termination checking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvolutionState {
    /// Current generation number
    pub generation: usize,
    /// Score of the current fittest individual
    pub best_fitness: usize,
    /// Score of a perfect individual
    pub max_fitness: usize,
}

/// Termination criterion trait
pub trait TerminationCriterion: Send + Sync {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate after a maximum number of generations
#[derive(Clone, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum generations reached"
    }
}

/// Terminate when target fitness is reached
#[derive(Clone, Debug, Default)]
pub struct TargetFitness {
    /// Target score, `None` meaning the maximum score
    pub target: Option<usize>,
}

impl TargetFitness {
    /// Terminate once the given score is reached
    pub fn new(target: usize) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Terminate on an exact match
    pub fn perfect() -> Self {
        Self { target: None }
    }
}

impl TerminationCriterion for TargetFitness {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.best_fitness >= self.target.unwrap_or(state.max_fitness)
    }

    fn reason(&self) -> &'static str {
        "Target fitness reached"
    }
}

pub mod prelude {
    pub use super::{EvolutionState, MaxGenerations, TargetFitness, TerminationCriterion};
}
