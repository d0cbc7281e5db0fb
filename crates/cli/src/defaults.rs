//! Shared default values for the command-line interface.
//! Model defaults mirror the library's; run-loop defaults are CLI-only.

use quasievo_sim::simulation::{
    DEFAULT_GENOME_LENGTH, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
    DEFAULT_SELECTION_ADVANTAGE,
};

pub const CONFIG_FILE: &str = "quasievo.json";

pub const GENOME_LENGTH: usize = DEFAULT_GENOME_LENGTH;
pub const MUTATION_RATE: f64 = DEFAULT_MUTATION_RATE;
pub const SELECTION_ADVANTAGE: f64 = DEFAULT_SELECTION_ADVANTAGE;
pub const POPULATION_SIZE: usize = DEFAULT_POPULATION_SIZE;

// Run loop
pub const GENERATIONS: usize = 500;
pub const INTERVAL_MS: u64 = 0;
pub const REPORT_EVERY: usize = 50;

// Number of genomes `--show-genomes` lists when given no count
pub const PREVIEW_GENOMES: &str = "30";
