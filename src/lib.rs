//! # royal-road
//!
//! A genetic algorithm that evolves 64-bit strings toward a hidden target.
//!
//! Fitness is the number of genes an individual shares with the target.
//! Each generation keeps the fittest individual (elitism), fills the
//! remaining slots with uniform crossovers of tournament winners, and
//! applies random-reset mutation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use royal_road::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = RoyalRoad::new(RunConfig::default())
//!     .run(&mut rng, &mut std::io::stdout())?;
//! assert!(result.solved);
//! # Ok::<(), EvolutionError>(())
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod runner;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::runner::{RoyalRoad, RunConfig};
    pub use crate::termination::prelude::*;
}
