//! Error-threshold diagnostics derived from a configuration.
//!
//! None of these quantities depend on the realized population; they are pure
//! functions of `L`, `p` and `s` and are recomputed on demand.

use crate::simulation::Configuration;
use serde::Serialize;
use std::fmt;

/// Mutation load below which the run is in the optimal regime.
pub const OPTIMAL_SPEED_LIMIT: f64 = 1.2;
/// Mutation load below which the run is elevated but not yet critical.
pub const ELEVATED_SPEED_LIMIT: f64 = 1.5;

/// Whether selection can hold the population at the wildtype peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemState {
    /// `L < 1/p`: selection maintains the wildtype
    Stable,
    /// `L >= 1/p`: error catastrophe
    Catastrophe,
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "✓ STABLE"),
            Self::Catastrophe => write!(f, "✗ CATASTROPHE"),
        }
    }
}

/// Banding of the mutation load `L · p` ("evolutionary speed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedRegime {
    Optimal,
    Elevated,
    Critical,
}

impl SpeedRegime {
    pub fn from_load(mutation_load: f64) -> Self {
        if mutation_load < OPTIMAL_SPEED_LIMIT {
            Self::Optimal
        } else if mutation_load < ELEVATED_SPEED_LIMIT {
            Self::Elevated
        } else {
            Self::Critical
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Optimal => "⚡",
            Self::Elevated => "⚠️",
            Self::Critical => "🔥",
        }
    }
}

/// Threshold metrics for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdMetrics {
    /// Critical genome length `1/p` (infinite when `p == 0`)
    pub error_threshold: f64,
    /// Expected mutations per genome per generation, `L · p`
    pub mutation_load: f64,
    /// `L / (1/p)`, numerically equal to the mutation load
    pub threshold_ratio: f64,
    pub is_below_threshold: bool,
    /// Wildtype advantage as a percentage, `s · 100`
    pub fitness_advantage_pct: f64,
}

impl ThresholdMetrics {
    pub fn from_config(config: &Configuration) -> Self {
        let genome_length = config.genome_length as f64;
        let error_threshold = 1.0 / config.mutation_rate;
        let mutation_load = config.mutation_load();

        Self {
            error_threshold,
            mutation_load,
            threshold_ratio: mutation_load,
            is_below_threshold: genome_length < error_threshold,
            fitness_advantage_pct: config.selection_advantage * 100.0,
        }
    }

    pub fn state(&self) -> SystemState {
        if self.is_below_threshold {
            SystemState::Stable
        } else {
            SystemState::Catastrophe
        }
    }

    pub fn speed(&self) -> SpeedRegime {
        SpeedRegime::from_load(self.mutation_load)
    }
}
