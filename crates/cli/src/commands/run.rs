use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use quasievo_sim::simulation::Simulation;
use std::time::Duration;

use crate::args::{OutputFormat, RunArgs};
use crate::printing::{
    print_banner, print_genomes, print_parameters, print_report_header, print_report_line,
    print_summary, print_threshold_panel,
};
use crate::utils::{format_history, write_output};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let config = args.model.resolve()?;

    // json/csv on stdout must stay machine-readable
    let chatty = args.format == OutputFormat::Pretty || args.output.is_some();

    if chatty {
        print_banner("Running Simulation");
        print_parameters(&config);
    }

    let mut sim = Simulation::new(config).context("Failed to initialize simulation")?;

    if chatty {
        print_threshold_panel(&sim.threshold());
    }

    tracing::info!(
        generations = args.generations,
        interval_ms = args.interval_ms,
        "starting run"
    );

    let pb = if args.progress {
        let pb = ProgressBar::new(args.generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let reporting = chatty && pb.is_none() && args.report_every > 0;
    if reporting {
        print_report_header();
        print_report_line(&sim.latest());
    }

    let interval = Duration::from_millis(args.interval_ms);
    for _ in 0..args.generations {
        let stats = sim.step();

        if reporting && stats.generation % args.report_every == 0 {
            print_report_line(&stats);
        }

        if let Some(pb) = &pb {
            pb.inc(1);
            pb.set_message(format!("WT {:.1}%", stats.wildtype_freq * 100.0));
        }

        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    if chatty {
        print_summary(&sim);
        if let Some(n) = args.show_genomes {
            let population = sim.population();
            print_genomes(population.preview(n), population.size());
        }
    }

    let records = sim.history().to_vec();
    match &args.output {
        Some(path) => {
            let content = format_history(&records, args.format)?;
            write_output(Some(path.as_path()), &content)?;
            println!("\n✓ History written to {}", path.display());
        }
        None if args.format != OutputFormat::Pretty => {
            let content = format_history(&records, args.format)?;
            write_output(None, &content)?;
        }
        None => {}
    }

    if chatty {
        println!("\n✓ Simulation complete!");
        println!("  Final generation: {}", sim.generation());
    }

    Ok(())
}
