//! Simulation configuration.
//!
//! `Configuration` is the single parameter set of a run. It can be written to
//! and read from JSON so a run can be reproduced exactly (given a seed).

use crate::errors::ConfigError;
use crate::evolution::{MutationModel, SelectionMethod, SinglePeakFitness};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default genome length `L`.
pub const DEFAULT_GENOME_LENGTH: usize = 20;
/// Default per-site mutation probability `p`.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;
/// Default wildtype advantage `s`.
pub const DEFAULT_SELECTION_ADVANTAGE: f64 = 0.2;
/// Default population size.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Genome length `L` (number of binary sites)
    pub genome_length: usize,
    /// Per-site mutation probability `p`
    pub mutation_rate: f64,
    /// Wildtype fitness advantage `s`
    pub selection_advantage: f64,
    /// Number of individuals, fixed for the lifetime of a run
    pub population_size: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Roulette-wheel lookup strategy
    #[serde(default)]
    pub selection: SelectionMethod,
}

impl Configuration {
    /// Create a configuration from the four model parameters.
    pub fn new(
        genome_length: usize,
        mutation_rate: f64,
        selection_advantage: f64,
        population_size: usize,
    ) -> Self {
        Self {
            genome_length,
            mutation_rate,
            selection_advantage,
            population_size,
            seed: None,
            selection: SelectionMethod::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_selection(mut self, selection: SelectionMethod) -> Self {
        self.selection = selection;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    /// The first invalid parameter found, in the order `L`, population size,
    /// `p`, `s`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genome_length < 1 {
            return Err(ConfigError::InvalidGenomeLength(self.genome_length));
        }
        if self.population_size < 1 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        self.mutation_model()?;
        self.fitness_model()?;
        Ok(())
    }

    /// Build the mutation operator for this configuration.
    pub fn mutation_model(&self) -> Result<MutationModel, ConfigError> {
        MutationModel::new(self.mutation_rate)
    }

    /// Build the fitness landscape for this configuration.
    pub fn fitness_model(&self) -> Result<SinglePeakFitness, ConfigError> {
        SinglePeakFitness::new(self.selection_advantage)
    }

    /// Mutation load `L · p`.
    pub fn mutation_load(&self) -> f64 {
        self.genome_length as f64 * self.mutation_rate
    }

    /// True when moving from `self` to `other` requires discarding the
    /// population (genome length or population size changed).
    pub fn requires_reinitialization(&self, other: &Configuration) -> bool {
        self.genome_length != other.genome_length || self.population_size != other.population_size
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(
            DEFAULT_GENOME_LENGTH,
            DEFAULT_MUTATION_RATE,
            DEFAULT_SELECTION_ADVANTAGE,
            DEFAULT_POPULATION_SIZE,
        )
    }
}
