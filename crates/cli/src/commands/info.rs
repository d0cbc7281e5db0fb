use anyhow::Result;
use quasievo_sim::simulation::ThresholdMetrics;

use crate::args::ModelArgs;
use crate::printing::{print_banner, print_parameters, print_threshold_panel};

pub fn show_info(model: &ModelArgs) -> Result<()> {
    let config = model.resolve()?;

    print_banner("Error Threshold Status");
    print_parameters(&config);
    print_threshold_panel(&ThresholdMetrics::from_config(&config));

    Ok(())
}
