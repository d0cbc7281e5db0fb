//! Base types for genome representation.
//!
//! This module provides the foundational types for representing binary
//! sites, whole genomes, and fitness values in the quasievo library.

mod allele;
pub mod fitness;
mod genome;

pub use allele::Allele;
pub use fitness::FitnessValue;
pub use genome::Genome;
