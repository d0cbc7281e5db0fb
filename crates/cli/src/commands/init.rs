use anyhow::{bail, Context, Result};

use crate::args::InitArgs;
use crate::printing::{print_banner, print_parameters};

pub fn init_configuration(args: &InitArgs) -> Result<()> {
    let output = &args.output;
    if output.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            output.display()
        );
    }

    let config = args.model.resolve()?;

    print_banner("Quasispecies Error-Threshold Simulator");
    print_parameters(&config);

    let json = config.to_json().context("Failed to serialize configuration")?;
    std::fs::write(output, json + "\n")
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(path = %output.display(), "wrote configuration");

    println!("✓ Configuration initialized successfully!");
    println!("  Saved to: {}", output.display());
    println!("  Run it with: quasievo run --config {}", output.display());

    Ok(())
}
