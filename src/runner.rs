//! Royal Road run loop
//!
//! Builds a target, evolves a population toward it, and reports progress one
//! line per generation.

use std::io::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::algorithms::generational::{Algorithm, AlgorithmConfig};
use crate::diagnostics::{EvolutionResult, GenerationStats};
use crate::error::EvolutionError;
use crate::fitness::royal_road::FitnessCalculator;
use crate::fitness::traits::Fitness;
use crate::population::individual::Individual;
use crate::population::population::{Population, REFERENCE_POPULATION_SIZE};
use crate::termination::{EvolutionState, MaxGenerations, TargetFitness, TerminationCriterion};

/// Configuration for a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of individuals per generation
    pub population_size: usize,
    /// Stop after this many generations even without a match
    pub max_generations: Option<usize>,
    /// Generation transition parameters
    pub algorithm: AlgorithmConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population_size: REFERENCE_POPULATION_SIZE,
            max_generations: None,
            algorithm: AlgorithmConfig::default(),
        }
    }
}

impl RunConfig {
    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        self.algorithm.validate()
    }
}

/// Royal Road run
///
/// Progress goes to the writer passed to [`RoyalRoad::run`]:
///
/// ```text
/// Royal Road!
/// generation & fitness 1 41
/// generation & fitness 2 43
/// ...
/// answer found in generation 187
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoyalRoad {
    config: RunConfig,
    target: Option<Individual>,
}

impl RoyalRoad {
    /// Create a run with the given configuration and a random target
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            target: None,
        }
    }

    /// Evolve toward a known target instead of a random one
    pub fn with_target(mut self, target: Individual) -> Self {
        self.target = Some(target);
        self
    }

    /// The configuration of this run
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run until the target is matched or the generation cap is hit
    pub fn run<R: Rng, W: Write>(
        &self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<EvolutionResult, EvolutionError> {
        self.config.validate()?;

        writeln!(out, "Royal Road!")?;

        let solution = match self.target {
            Some(target) => target,
            None => Individual::generate(rng),
        };
        let fitness = FitnessCalculator::new(solution);
        let algorithm = Algorithm::new(self.config.algorithm.clone(), &fitness)?;

        let window = self.config.algorithm.sampling_window;
        if !window.matches(self.config.population_size) {
            warn!(
                window = window.width(self.config.population_size),
                population_size = self.config.population_size,
                "sampling window does not cover the population"
            );
        }

        let mut population = Population::with_capacity(self.config.population_size);
        population.initialize(self.config.population_size, true, rng);

        let target = TargetFitness::perfect();
        let cap = self.config.max_generations.map(MaxGenerations::new);
        let mut generation = 0;

        let (best, reason) = loop {
            let best = *population
                .fittest(&fitness)
                .ok_or(EvolutionError::EmptyPopulation)?;
            let state = EvolutionState {
                generation,
                best_fitness: fitness.score_fitness(&best),
                max_fitness: fitness.max_fitness(),
            };

            if target.should_terminate(&state) {
                break (best, target.reason());
            }
            if let Some(cap) = cap.as_ref().filter(|c| c.should_terminate(&state)) {
                break (best, cap.reason());
            }

            generation += 1;
            population = algorithm.evolve_population(population, rng)?;

            let stats = GenerationStats::from_population(&population, &fitness, generation)
                .ok_or(EvolutionError::EmptyPopulation)?;
            debug!(
                generation,
                best = stats.best_fitness,
                worst = stats.worst_fitness,
                mean = stats.mean_fitness,
                diversity = stats.diversity,
                "generation evolved"
            );
            writeln!(
                out,
                "generation & fitness {} {}",
                generation, stats.best_fitness
            )?;
        };

        let best_fitness = fitness.score_fitness(&best);
        let solved = best_fitness == fitness.max_fitness();
        if solved {
            writeln!(out, "answer found in generation {}", generation)?;
            info!(generation, genome = %best, "target matched");
        } else {
            warn!(
                generation,
                best_fitness,
                "stopped before matching the target"
            );
        }

        Ok(EvolutionResult::new(best, best_fitness, generation, solved, reason))
    }
}
