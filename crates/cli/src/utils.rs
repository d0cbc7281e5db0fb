use anyhow::{Context, Result};
use quasievo_sim::simulation::GenerationStats;
use std::fmt::Write as _;
use std::path::Path;

use crate::args::OutputFormat;

const CSV_HEADER: &str =
    "generation,avg_hamming,wildtype_freq,mutation_load,information_rate,entropy";

/// Render history records in the requested format.
pub fn format_history(records: &[GenerationStats], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)
                .context("Failed to serialize history")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(history_to_csv(records)),
        OutputFormat::Pretty => Ok(history_to_table(records)),
    }
}

fn history_to_csv(records: &[GenerationStats]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            r.generation,
            r.avg_hamming,
            r.wildtype_freq,
            r.mutation_load,
            r.information_rate,
            r.entropy
        );
    }
    out
}

fn history_to_table(records: &[GenerationStats]) -> String {
    let mut out = format!(
        "{:>8}  {:>9}  {:>9}  {:>8}  {:>8}  {:>8}\n",
        "gen", "wildtype", "avg d", "load", "info", "entropy"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:>8}  {:>8.1}%  {:>9.2}  {:>8.2}  {:>8.2}  {:>8.2}",
            r.generation,
            r.wildtype_freq * 100.0,
            r.avg_hamming,
            r.mutation_load,
            r.information_rate,
            r.entropy
        );
    }
    out
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
