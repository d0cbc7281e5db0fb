//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the quasievo library.
//!
//! # Example
//!
//! ```
//! use quasievo_sim::prelude::*;
//!
//! let mut sim = SimulationBuilder::new().seed(7).build().unwrap();
//! let stats: GenerationStats = sim.step();
//! assert_eq!(stats.generation, 1);
//! ```

pub use crate::base::fitness::{self, FitnessValue};
pub use crate::base::{Allele, Genome};
pub use crate::errors::{self, ConfigError};
pub use crate::evolution::{MutationModel, RouletteWheel, SelectionMethod, SinglePeakFitness};
pub use crate::genome::Individual;
pub use crate::simulation::{
    Configuration, GenerationStats, History, Population, Simulation, SimulationBuilder,
    ThresholdMetrics,
};
