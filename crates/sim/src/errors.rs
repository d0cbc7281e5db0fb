use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// an `Allele`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid allele symbol: {0:?} (expected '0' or '1')")]
pub struct InvalidAllele(pub char);

/// Error type for failures when parsing a `Genome` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGenome {
    /// A character was not recognized as a valid allele.
    #[error("Invalid character in genome at position {position}: {symbol:?}")]
    InvalidSymbol { position: usize, symbol: char },

    /// The genome was empty when a non-empty genome was required.
    #[error("Empty genome not allowed")]
    Empty,
}

/// Errors raised while validating a simulation configuration.
///
/// Validation always runs before any engine state is touched, so receiving
/// one of these leaves a running simulation exactly as it was.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Genome length must be at least one site.
    #[error("Invalid genome length: {0} (must be at least 1)")]
    InvalidGenomeLength(usize),

    /// Population must contain at least one individual.
    #[error("Invalid population size: {0} (must be at least 1)")]
    InvalidPopulationSize(usize),

    /// Per-site mutation probability outside `[0, 1]` or not a number.
    #[error("Invalid mutation rate: {0} (must be between 0.0 and 1.0)")]
    InvalidMutationRate(f64),

    /// Wildtype fitness advantage negative or not finite.
    #[error("Invalid selection advantage: {0} (must be finite and >= 0.0)")]
    InvalidAdvantage(f64),

    /// Configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be decoded.
    #[error("Invalid configuration document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
