//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fitness::traits::Fitness;
use crate::population::individual::Individual;

/// Population size of the reference configuration
pub const REFERENCE_POPULATION_SIZE: usize = 20;

/// Index range that [`Population::random`] draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingWindow {
    /// Draw from the first `n` positions whatever the population size is.
    ///
    /// Draws past the end of a smaller population find nobody, and members
    /// past `n` in a larger one are never drawn.
    Fixed(usize),
    /// Draw uniformly over the whole population
    Whole,
}

impl SamplingWindow {
    /// Width of the window for a population of `len` individuals
    pub fn width(&self, len: usize) -> usize {
        match self {
            Self::Fixed(n) => *n,
            Self::Whole => len,
        }
    }

    /// Check whether the window covers exactly `len` individuals
    pub fn matches(&self, len: usize) -> bool {
        self.width(len) == len
    }
}

impl Default for SamplingWindow {
    fn default() -> Self {
        Self::Fixed(REFERENCE_POPULATION_SIZE)
    }
}

/// An ordered population of individuals
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create an empty population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a random population
    pub fn random_population<R: Rng>(size: usize, rng: &mut R) -> Self {
        let mut population = Self::with_capacity(size);
        population.initialize(size, true, rng);
        population
    }

    /// Append `size` random individuals, or do nothing when `should_init` is false
    pub fn initialize<R: Rng>(&mut self, size: usize, should_init: bool, rng: &mut R) {
        if !should_init {
            return;
        }
        self.individuals.reserve(size);
        for _ in 0..size {
            self.individuals.push(Individual::generate(rng));
        }
    }

    /// Add an individual to the end of the population
    pub fn add_individual(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get the population size
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get a mutable iterator over the individuals
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Get the fittest individual
    ///
    /// Only a strictly higher score replaces the current best, so ties go
    /// to the earliest individual.
    pub fn fittest<Fit: Fitness + ?Sized>(&self, fitness: &Fit) -> Option<&Individual> {
        let mut iter = self.individuals.iter();
        let mut best = iter.next()?;
        let mut best_score = fitness.score_fitness(best);
        for individual in iter {
            let score = fitness.score_fitness(individual);
            if score > best_score {
                best = individual;
                best_score = score;
            }
        }
        Some(best)
    }

    /// Draw an individual uniformly at random from `window`
    ///
    /// Returns `None` when the drawn position lies past the end of the
    /// population, or when the window is empty.
    pub fn random<R: Rng>(&self, window: SamplingWindow, rng: &mut R) -> Option<&Individual> {
        let width = window.width(self.size());
        if width == 0 {
            return None;
        }
        self.individuals.get(rng.gen_range(0..width))
    }

    /// Mean score over the population
    pub fn mean_fitness<Fit: Fitness + ?Sized>(&self, fitness: &Fit) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let total: usize = self
            .individuals
            .iter()
            .map(|i| fitness.score_fitness(i))
            .sum();
        Some(total as f64 / self.size() as f64)
    }

    /// Mean pairwise Hamming distance
    pub fn diversity(&self) -> f64 {
        if self.size() < 2 {
            return 0.0;
        }

        let mut total_distance = 0usize;
        let mut count = 0usize;

        for i in 0..self.size() {
            for j in (i + 1)..self.size() {
                total_distance += self.individuals[i].hamming_distance(&self.individuals[j]);
                count += 1;
            }
        }

        total_distance as f64 / count as f64
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
