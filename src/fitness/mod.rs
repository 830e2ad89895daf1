//! Fitness evaluation
//!
//! This module provides the fitness abstraction and the Royal Road scorer.

pub mod royal_road;
pub mod traits;

pub mod prelude {
    pub use super::royal_road::*;
    pub use super::traits::*;
}
