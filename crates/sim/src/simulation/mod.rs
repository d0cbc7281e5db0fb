//! Simulation engine and population management.
//!
//! This module provides the generational loop of the error-threshold model
//! together with its configuration, statistics and diagnostics.
//!
//! - `Simulation`: the engine that runs generations and orchestrates
//!   selection and mutation.
//! - `Population`: immutable per-generation snapshot of individuals.
//! - `SimulationBuilder`: fluent builder with the model defaults.
//! - `GenerationStats` / `History`: per-generation records and the bounded
//!   window that keeps the most recent of them.
//! - `ThresholdMetrics`: configuration-derived error-threshold quantities.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod history;
pub mod population;
pub mod stats;
pub mod threshold;

pub use builder::SimulationBuilder;
pub use configs::{
    Configuration, DEFAULT_GENOME_LENGTH, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
    DEFAULT_SELECTION_ADVANTAGE,
};
pub use engine::Simulation;
pub use history::{History, HISTORY_CAPACITY};
pub use population::Population;
pub use stats::{shannon_entropy, GenerationStats};
pub use threshold::{SpeedRegime, SystemState, ThresholdMetrics};
