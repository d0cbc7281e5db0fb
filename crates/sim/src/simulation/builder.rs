//! Builder pattern for creating simulations.
//!
//! Provides a fluent API over `Configuration` with the model defaults
//! (`L = 20`, `p = 0.05`, `s = 0.2`, `N = 100`) filled in.

use crate::errors::ConfigError;
use crate::evolution::SelectionMethod;
use crate::simulation::{Configuration, Simulation};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use quasievo_sim::simulation::SimulationBuilder;
///
/// // Defaults
/// let sim = SimulationBuilder::new().build().unwrap();
/// assert_eq!(sim.population().size(), 100);
///
/// // A reproducible run beyond the error threshold
/// let mut sim = SimulationBuilder::new()
///     .genome_length(50)
///     .mutation_rate(0.05)
///     .selection_advantage(0.2)
///     .population_size(200)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert!(!sim.threshold().is_below_threshold);
/// sim.run_for(10);
/// assert_eq!(sim.generation(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: Configuration,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self { config }
    }

    /// Set the genome length `L`.
    pub fn genome_length(mut self, length: usize) -> Self {
        self.config.genome_length = length;
        self
    }

    /// Set the per-site mutation probability `p`.
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the wildtype fitness advantage `s`.
    pub fn selection_advantage(mut self, advantage: f64) -> Self {
        self.config.selection_advantage = advantage;
        self
    }

    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn selection_method(mut self, method: SelectionMethod) -> Self {
        self.config.selection = method;
        self
    }

    /// The configuration assembled so far (not yet validated).
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Validate the parameters and build the simulation.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.config)
    }
}
