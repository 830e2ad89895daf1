//! Royal Road demo
//!
//! Evolves a population of 64-bit strings toward a random target with the
//! reference parameters, printing the best score of every generation.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use royal_road::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout carries only the progress report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, "seeded random source");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = RoyalRoad::new(RunConfig::default()).run(&mut rng, &mut out)?;
    info!("{}", result.summary());

    Ok(())
}
