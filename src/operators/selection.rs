//! Selection operators
//!
//! This module provides tournament selection.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::traits::Fitness;
use crate::operators::traits::SelectionOperator;
use crate::population::individual::Individual;
use crate::population::population::{Population, SamplingWindow};

/// Tournament selection operator
///
/// Draws `tournament_size` individuals with replacement into a transient
/// population and returns its fittest member.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
    /// Window the contestants are drawn from
    pub window: SamplingWindow,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self {
            tournament_size,
            window: SamplingWindow::default(),
        }
    }

    /// Draw contestants from the given window
    pub fn with_window(mut self, window: SamplingWindow) -> Self {
        self.window = window;
        self
    }

    /// Assemble the transient tournament population
    pub fn tournament<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> Result<Population, OperatorError> {
        let mut tournament = Population::with_capacity(self.tournament_size);
        for _ in 0..self.tournament_size {
            let contestant = population.random(self.window, rng).ok_or_else(|| {
                OperatorError::SelectionFailed(format!(
                    "sampling window of {} does not fit a population of {}",
                    self.window.width(population.size()),
                    population.size()
                ))
            })?;
            tournament.add_individual(*contestant);
        }
        Ok(tournament)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng, Fit: Fitness + ?Sized>(
        &self,
        population: &Population,
        fitness: &Fit,
        rng: &mut R,
    ) -> Result<Individual, OperatorError> {
        let tournament = self.tournament(population, rng)?;
        tournament
            .fittest(fitness)
            .copied()
            .ok_or_else(|| OperatorError::SelectionFailed("empty tournament".to_string()))
    }
}
