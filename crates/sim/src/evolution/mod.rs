//! Evolution module providing mutation and selection.
//!
//! This module implements the two evolutionary forces of the model:
//! - **Mutation**: symmetric per-site flips on binary genomes
//! - **Selection**: a single-peak fitness landscape and roulette-wheel
//!   parent sampling

pub mod mutation;
pub mod selection;

pub use mutation::MutationModel;
pub use selection::{RouletteWheel, SelectionMethod, SinglePeakFitness};
