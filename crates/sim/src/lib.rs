//! # Simulation Crate
//!
//! The `sim` crate provides the core logic of a quasispecies error-threshold
//! simulator. A fixed-size population of binary genomes evolves under a
//! single-peak fitness landscape: the all-ones wildtype carries an advantage
//! `s`, every site flips with probability `p` on replication, and parents
//! are drawn by roulette wheel each generation.
//!
//! It includes modules for binary genomes, individuals, the evolutionary
//! operators (mutation, selection), and the simulation engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Allele, Genome};
