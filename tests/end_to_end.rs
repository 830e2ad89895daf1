//! End-to-end runs of the Royal Road loop with fixed seeds and targets.

use rand::rngs::StdRng;
use rand::SeedableRng;
use royal_road::prelude::*;

const TARGET_PATTERN: u64 = 0xC0FF_EE00_DEAD_BEEF;

fn run_reference(seed: u64) -> (EvolutionResult, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::new();
    let config = RunConfig {
        max_generations: Some(2000),
        ..RunConfig::default()
    };

    let result = RoyalRoad::new(config)
        .with_target(Individual::from_u64(TARGET_PATTERN))
        .run(&mut rng, &mut out)
        .unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (result, lines)
}

#[test]
fn reference_run_matches_target() {
    let (result, _) = run_reference(42);

    assert!(result.solved, "{}", result.summary());
    assert_eq!(result.best_fitness, 64);
    assert_eq!(result.best.to_u64(), TARGET_PATTERN);
    assert!(result.generations < 2000);
    assert_eq!(result.termination_reason, "Target fitness reached");
}

#[test]
fn reference_run_output_format() {
    let (result, lines) = run_reference(7);

    assert_eq!(lines.first().map(String::as_str), Some("Royal Road!"));
    assert_eq!(lines.len(), result.generations + 2);

    let mut previous = 0;
    for (i, line) in lines[1..lines.len() - 1].iter().enumerate() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 5, "unexpected line {:?}", line);
        assert_eq!(&fields[..3], &["generation", "&", "fitness"]);
        assert_eq!(fields[3].parse::<usize>().unwrap(), i + 1);

        // Elitism keeps the reported best score from dropping
        let score: usize = fields[4].parse().unwrap();
        assert!(score >= previous && score <= 64);
        previous = score;
    }
    assert_eq!(previous, 64);
    assert_eq!(
        lines.last().unwrap(),
        &format!("answer found in generation {}", result.generations)
    );
}

#[test]
fn reference_run_is_reproducible() {
    let (first, first_lines) = run_reference(1234);
    let (second, second_lines) = run_reference(1234);

    assert_eq!(first.generations, second.generations);
    assert_eq!(first_lines, second_lines);
}

#[test]
fn corrected_sampling_window_also_converges() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut out = Vec::new();
    let config = RunConfig {
        population_size: 30,
        max_generations: Some(2000),
        algorithm: AlgorithmConfig {
            sampling_window: SamplingWindow::Whole,
            ..AlgorithmConfig::default()
        },
    };

    let result = RoyalRoad::new(config)
        .with_target(Individual::from_u64(!TARGET_PATTERN))
        .run(&mut rng, &mut out)
        .unwrap();
    assert!(result.solved, "{}", result.summary());
    assert_eq!(result.best.to_u64(), !TARGET_PATTERN);
}
