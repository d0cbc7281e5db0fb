use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use quasievo_sim::evolution::SelectionMethod;
use quasievo_sim::simulation::Configuration;
use std::path::PathBuf;

use crate::defaults;

/// Model parameters shared by every subcommand.
///
/// Flags override values read from `--config`, which in turn override the
/// built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Genome length L (number of binary sites)
    #[arg(short = 'L', long)]
    pub genome_length: Option<usize>,

    /// Per-site mutation probability p (0.0-1.0)
    #[arg(short = 'p', long)]
    pub mutation_rate: Option<f64>,

    /// Wildtype fitness advantage s (wildtype fitness is 1 + s)
    #[arg(short = 's', long = "selection")]
    pub selection_advantage: Option<f64>,

    /// Population size
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Roulette-wheel lookup strategy
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// JSON configuration file (see `quasievo init`)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl ModelArgs {
    /// Merge defaults, the configuration file and flags, then validate.
    pub fn resolve(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => Configuration::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => Configuration::new(
                defaults::GENOME_LENGTH,
                defaults::MUTATION_RATE,
                defaults::SELECTION_ADVANTAGE,
                defaults::POPULATION_SIZE,
            ),
        };

        if let Some(length) = self.genome_length {
            config.genome_length = length;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(advantage) = self.selection_advantage {
            config.selection_advantage = advantage;
        }
        if let Some(size) = self.population_size {
            config.population_size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(method) = self.method {
            config.selection = method.into();
        }

        config.validate().context("Invalid model parameters")?;
        Ok(config)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    /// Running subtraction over the population
    Scan,
    /// Binary search over cumulative fitness
    Cumulative,
}

impl From<MethodArg> for SelectionMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Scan => SelectionMethod::LinearScan,
            MethodArg::Cumulative => SelectionMethod::CumulativeSearch,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Pretty,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Pause between generations, in milliseconds
    #[arg(long, default_value_t = defaults::INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print a status line every N generations (0 disables)
    #[arg(long, default_value_t = defaults::REPORT_EVERY)]
    pub report_every: usize,

    /// Output format for the recorded history
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Write the history to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print the first N genomes of the final population
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = defaults::PREVIEW_GENOMES
    )]
    pub show_genomes: Option<usize>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
