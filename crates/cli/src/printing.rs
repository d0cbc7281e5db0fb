use quasievo_sim::genome::Individual;
use quasievo_sim::simulation::{Configuration, GenerationStats, Simulation, ThresholdMetrics};

pub fn print_banner(title: &str) {
    println!("🧬 Quasievo - {title}");
    println!("============================================\n");
}

pub fn print_parameters(config: &Configuration) {
    println!("📋 Model Parameters");
    println!("  • Genome Length: {} [-L, --genome-length]", config.genome_length);
    println!("  • Mutation Rate: {} per site [-p, --mutation-rate]", config.mutation_rate);
    println!(
        "  • Selection Advantage: {} (wildtype fitness {:.2}) [-s, --selection]",
        config.selection_advantage,
        1.0 + config.selection_advantage
    );
    println!("  • Population Size: {} [-n, --population-size]", config.population_size);
    match config.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }
    println!("  • Selection Method: {:?} [--method]", config.selection);
    println!();
}

pub fn print_threshold_panel(metrics: &ThresholdMetrics) {
    println!("🎯 Error Threshold");
    println!("  • Error Threshold (1/p): {:.1}", metrics.error_threshold);
    println!("  • Mutation Load (L×p): {:.2}", metrics.mutation_load);
    println!(
        "  • Threshold Ratio (L/(1/p)): {:.0}%",
        metrics.threshold_ratio * 100.0
    );
    println!(
        "  • Fitness Advantage: {:.0}%",
        metrics.fitness_advantage_pct
    );
    println!(
        "  • Evolutionary Speed: {:.2} {}",
        metrics.mutation_load,
        metrics.speed().symbol()
    );
    println!("  • System State: {}", metrics.state());
    println!();
}

pub fn print_report_header() {
    println!(
        "{:>8}  {:>9}  {:>9}  {:>8}  {:>8}",
        "gen", "wildtype", "avg d", "entropy", "info"
    );
}

pub fn print_report_line(stats: &GenerationStats) {
    println!(
        "{:>8}  {:>8.1}%  {:>9.2}  {:>8.2}  {:>8.2}",
        stats.generation,
        stats.wildtype_freq * 100.0,
        stats.avg_hamming,
        stats.entropy,
        stats.information_rate
    );
}

pub fn print_summary(sim: &Simulation) {
    let stats = sim.latest();
    let size = sim.population().size();

    println!("\n📊 Population Statistics (generation {})", stats.generation);
    println!("  • Wildtype Frequency: {:.1}%", stats.wildtype_freq * 100.0);
    println!("  • Avg Hamming Distance: {:.2}", stats.avg_hamming);
    println!(
        "  • Population Diversity (Entropy): {:.2} bits ({:.0}% of max)",
        stats.entropy,
        stats.normalized_entropy(size) * 100.0
    );
    println!("  • Information Rate: {:.2}", stats.information_rate);
    println!(
        "  • Perfect genomes: {}/{}",
        stats.perfect_genomes(size),
        size
    );
}

pub fn print_genomes(individuals: &[Individual], total: usize) {
    println!("\n🧬 Population Genomes (first {} individuals)", individuals.len());
    let width = total.to_string().len();
    for (idx, ind) in individuals.iter().enumerate() {
        println!("  {:>width$}  {}  {}", idx + 1, ind.genome(), ind.label());
    }
    if total > individuals.len() {
        println!("  ... and {} more", total - individuals.len());
    }
}
