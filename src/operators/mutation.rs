//! Mutation operators
//!
//! This module provides random-reset mutation for bit string genomes.

use rand::Rng;

use crate::operators::traits::MutationOperator;
use crate::population::individual::Individual;

/// Random-reset mutation
///
/// Each gene is independently selected with probability `mutation_rate` and
/// replaced by a fresh uniform random bit. A selected gene keeps its value
/// half of the time, so this is not a guaranteed flip.
#[derive(Clone, Debug)]
pub struct RandomResetMutation {
    /// Per-gene selection probability
    pub mutation_rate: f64,
}

impl RandomResetMutation {
    /// Create a new random-reset mutation
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Mutation rate must be in [0, 1]"
        );
        Self { mutation_rate }
    }
}

impl MutationOperator for RandomResetMutation {
    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        for i in 0..individual.size() {
            if rng.gen::<f64>() < self.mutation_rate {
                individual.set_gene(i, rng.gen());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_reset_rate_zero_is_identity() {
        let mut rng = rand::thread_rng();
        let original = Individual::generate(&mut rng);
        let mut ind = original;

        let mutation = RandomResetMutation::new(0.0);
        for _ in 0..100 {
            mutation.mutate(&mut ind, &mut rng);
        }
        assert_eq!(ind, original);
    }

    #[test]
    fn test_random_reset_rate_one_redraws_every_gene() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut ind = Individual::zeros();

        RandomResetMutation::new(1.0).mutate(&mut ind, &mut rng);

        // Redrawn genes are fair coin flips, so roughly half become ones
        let ones = ind.genes().iter().filter(|&&g| g).count();
        assert!(ones > 10 && ones < 54, "Expected ~32 ones, got {}", ones);
    }

    #[test]
    fn test_random_reset_rate_one_matches_fresh_draws() {
        // With rate 1 every position consumes a selection draw and a bit draw
        let mut rng = StdRng::seed_from_u64(23);
        let mut ind = Individual::from_u64(u64::MAX);
        RandomResetMutation::new(1.0).mutate(&mut ind, &mut rng);

        let mut replay = StdRng::seed_from_u64(23);
        let mut expected = Individual::zeros();
        for i in 0..expected.size() {
            let _selector: f64 = replay.gen();
            expected.set_gene(i, replay.gen());
        }
        assert_eq!(ind, expected);
    }

    #[test]
    fn test_random_reset_low_rate_changes_few_genes() {
        let mut rng = StdRng::seed_from_u64(99);
        let mutation = RandomResetMutation::new(0.015);

        let mut total_changed = 0;
        for _ in 0..100 {
            let original = Individual::generate(&mut rng);
            let mut ind = original;
            mutation.mutate(&mut ind, &mut rng);
            total_changed += ind.hamming_distance(&original);
        }

        // 64 * 0.015 * 0.5 ≈ 0.48 changed genes per individual
        let avg = total_changed as f64 / 100.0;
        assert!(avg < 2.0, "Expected avg ~0.5, got {}", avg);
    }

    #[test]
    #[should_panic(expected = "Mutation rate must be in [0, 1]")]
    fn test_random_reset_invalid_rate() {
        RandomResetMutation::new(-0.1);
    }
}
