//! Generational Genetic Algorithm
//!
//! This module implements the generation transition: tournament selection,
//! uniform crossover, random-reset mutation, and optional elitism.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::EvolutionError;
use crate::fitness::traits::Fitness;
use crate::operators::crossover::UniformCrossover;
use crate::operators::mutation::RandomResetMutation;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::population::{Population, SamplingWindow};

/// Configuration for the Algorithm
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Per-gene probability of a random reset
    pub mutation_rate: f64,
    /// Per-gene probability of inheriting from the first parent
    pub uniform_rate: f64,
    /// Whether to carry the fittest individual forward unchanged
    pub elitism: bool,
    /// Number of contestants per tournament
    pub tournament_size: usize,
    /// Window tournament contestants are drawn from
    pub sampling_window: SamplingWindow,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.015,
            uniform_rate: 0.5,
            elitism: true,
            tournament_size: 5,
            sampling_window: SamplingWindow::default(),
        }
    }
}

impl AlgorithmConfig {
    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "Mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.uniform_rate) {
            return Err(EvolutionError::Configuration(format!(
                "Uniform rate must be in [0, 1], got {}",
                self.uniform_rate
            )));
        }
        if self.tournament_size == 0 {
            return Err(EvolutionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.sampling_window == SamplingWindow::Fixed(0) {
            return Err(EvolutionError::Configuration(
                "Sampling window must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of leading individuals exempt from variation
    pub fn elite_offset(&self) -> usize {
        usize::from(self.elitism)
    }
}

/// Builder for Algorithm
#[derive(Clone, Debug, Default)]
pub struct AlgorithmBuilder {
    config: AlgorithmConfig,
}

impl AlgorithmBuilder {
    /// Create a new builder with the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-gene mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the per-gene uniform crossover rate
    pub fn uniform_rate(mut self, rate: f64) -> Self {
        self.config.uniform_rate = rate;
        self
    }

    /// Enable or disable elitism
    pub fn elitism(mut self, enabled: bool) -> Self {
        self.config.elitism = enabled;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the window tournament contestants are drawn from
    pub fn sampling_window(mut self, window: SamplingWindow) -> Self {
        self.config.sampling_window = window;
        self
    }

    /// Build the Algorithm, scoring with `fitness`
    pub fn build<Fit: Fitness>(self, fitness: &Fit) -> Result<Algorithm<'_, Fit>, EvolutionError> {
        Algorithm::new(self.config, fitness)
    }
}

/// Generational genetic algorithm
///
/// Borrows the fitness function and owns its operators. Populations go in
/// by value and new populations come out.
#[derive(Debug)]
pub struct Algorithm<'a, Fit: Fitness> {
    config: AlgorithmConfig,
    selection: TournamentSelection,
    crossover: UniformCrossover,
    mutation: RandomResetMutation,
    fitness: &'a Fit,
}

impl<'a, Fit: Fitness> Algorithm<'a, Fit> {
    /// Create an Algorithm from a validated configuration
    pub fn new(config: AlgorithmConfig, fitness: &'a Fit) -> Result<Self, EvolutionError> {
        config.validate()?;

        Ok(Self {
            selection: TournamentSelection::new(config.tournament_size)
                .with_window(config.sampling_window),
            crossover: UniformCrossover::with_rate(config.uniform_rate),
            mutation: RandomResetMutation::new(config.mutation_rate),
            fitness,
            config,
        })
    }

    /// The configuration this Algorithm runs with
    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// Produce the next generation
    ///
    /// With elitism the current fittest individual is copied to index 0
    /// untouched. Every other slot is filled by crossing over two tournament
    /// winners, then mutated. The result has the same size as the input.
    pub fn evolve_population<R: Rng>(
        &self,
        population: Population,
        rng: &mut R,
    ) -> Result<Population, EvolutionError> {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let elite_offset = self.config.elite_offset();
        let mut new_population = Population::with_capacity(population.size());

        if self.config.elitism {
            let elite = population
                .fittest(self.fitness)
                .ok_or(EvolutionError::EmptyPopulation)?;
            new_population.add_individual(*elite);
        }

        for _ in elite_offset..population.size() {
            let parent1 = self.selection.select(&population, self.fitness, rng)?;
            let parent2 = self.selection.select(&population, self.fitness, rng)?;
            new_population.add_individual(self.crossover.crossover(&parent1, &parent2, rng));
        }

        for individual in new_population.iter_mut().skip(elite_offset) {
            self.mutation.mutate(individual, rng);
        }

        trace!(
            size = new_population.size(),
            elite_offset,
            "evolved population"
        );

        Ok(new_population)
    }
}
