//! Crossover operators
//!
//! This module provides uniform crossover for bit string genomes.

use rand::Rng;

use crate::operators::traits::CrossoverOperator;
use crate::population::individual::Individual;

/// Uniform crossover
///
/// Each gene is inherited independently: from parent1 when a uniform draw
/// in [0, 1) falls below `uniform_rate`, otherwise from parent2.
#[derive(Clone, Debug)]
pub struct UniformCrossover {
    /// Probability of taking a gene from parent1 (default: 0.5)
    pub uniform_rate: f64,
}

impl UniformCrossover {
    /// Create a new uniform crossover with an even split
    pub fn new() -> Self {
        Self { uniform_rate: 0.5 }
    }

    /// Create with a specific rate towards parent1
    pub fn with_rate(uniform_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&uniform_rate),
            "Uniform rate must be in [0, 1]"
        );
        Self { uniform_rate }
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossoverOperator for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        let mut child = Individual::zeros();
        for i in 0..parent1.size() {
            if rng.gen::<f64>() < self.uniform_rate {
                child.set_gene(i, parent1.gene(i));
            } else {
                child.set_gene(i, parent2.gene(i));
            }
        }
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_crossover_same_parents() {
        let mut rng = rand::thread_rng();
        let parent = Individual::generate(&mut rng);

        for rate in [0.0, 0.3, 0.5, 1.0] {
            let child = UniformCrossover::with_rate(rate).crossover(&parent, &parent, &mut rng);
            assert_eq!(child, parent);
        }
    }

    #[test]
    fn test_uniform_crossover_rate_one_copies_parent1() {
        let mut rng = rand::thread_rng();
        let parent1 = Individual::from_u64(0x0F0F_0F0F_0F0F_0F0F);
        let parent2 = Individual::from_u64(0xF0F0_F0F0_F0F0_F0F0);

        let child = UniformCrossover::with_rate(1.0).crossover(&parent1, &parent2, &mut rng);
        assert_eq!(child, parent1);
    }

    #[test]
    fn test_uniform_crossover_rate_zero_copies_parent2() {
        let mut rng = rand::thread_rng();
        let parent1 = Individual::from_u64(0x0F0F_0F0F_0F0F_0F0F);
        let parent2 = Individual::from_u64(0xF0F0_F0F0_F0F0_F0F0);

        let child = UniformCrossover::with_rate(0.0).crossover(&parent1, &parent2, &mut rng);
        assert_eq!(child, parent2);
    }

    #[test]
    fn test_uniform_crossover_mixes_parents() {
        let mut rng = rand::thread_rng();
        let parent1 = Individual::zeros();
        let parent2 = Individual::from_u64(u64::MAX);

        let child = UniformCrossover::new().crossover(&parent1, &parent2, &mut rng);
        // Every gene comes from one of the parents; with an even split both contribute
        let from_parent2 = child.genes().iter().filter(|&&g| g).count();
        assert!(
            from_parent2 > 10 && from_parent2 < 54,
            "Expected ~32 genes from parent2, got {}",
            from_parent2
        );
        assert_ne!(child, parent1);
        assert_ne!(child, parent2);
    }

    #[test]
    #[should_panic(expected = "Uniform rate must be in [0, 1]")]
    fn test_uniform_crossover_invalid_rate() {
        UniformCrossover::with_rate(1.5);
    }
}
