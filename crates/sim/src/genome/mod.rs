//! Genome-carrying entities of the population model.

mod individual;

pub use individual::Individual;
