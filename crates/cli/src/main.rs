mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{InitArgs, ModelArgs, RunArgs};
use commands::{info, init, run};

/// Quasievo: A Quasispecies Error-Threshold Simulator
///
/// This tool simulates a population of binary genomes replicating with
/// per-site copy errors under selection for a single wildtype sequence, and
/// shows where the error threshold L = 1/p lies.
#[derive(Parser, Debug)]
#[command(name = "quasievo")]
#[command(author, version, about = "Simulates the quasispecies error threshold", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation.
    ///
    /// Evolves the population generation by generation and reports
    /// wildtype frequency, Hamming distance and diversity over time.
    Run(Box<RunArgs>),

    /// Show the error-threshold status of a parameter set.
    ///
    /// Computes 1/p, the mutation load L×p and whether the wildtype can be
    /// maintained, without running anything.
    Info(ModelArgs),

    /// Write a JSON configuration template.
    Init(InitArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Info(model) => info::show_info(&model)?,
        Commands::Init(args) => init::init_configuration(&args)?,
    }

    Ok(())
}
