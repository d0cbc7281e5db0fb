//! Simulation engine for the error-threshold model.
//!
//! Each generation runs the same pipeline: score the current population,
//! draw parents by roulette wheel, copy each parent's genome with per-site
//! flips, then replace the population wholesale and record statistics.

use crate::errors::ConfigError;
use crate::evolution::{MutationModel, RouletteWheel, SinglePeakFitness};
use crate::genome::Individual;
use crate::simulation::{Configuration, GenerationStats, History, Population, ThresholdMetrics};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::sync::Arc;

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Parameters in force
    config: Configuration,
    /// Per-site flip model derived from `config`
    mutation: MutationModel,
    /// Fitness landscape derived from `config`
    fitness: SinglePeakFitness,
    /// Current population
    population: Population,
    /// Recent generation statistics
    history: History,
    /// Master RNG; all randomness of a step is drawn from it
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation with an all-wildtype population.
    ///
    /// # Errors
    /// Returns the first invalid parameter of `config`.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;
        let mutation = config.mutation_model()?;
        let fitness = config.fitness_model()?;

        tracing::info!(
            genome_length = config.genome_length,
            mutation_rate = config.mutation_rate,
            selection_advantage = config.selection_advantage,
            population_size = config.population_size,
            seed = ?config.seed,
            "initialized simulation"
        );

        Ok(Self {
            population: Population::wildtype(
                config.population_size,
                config.genome_length,
                &fitness,
            ),
            history: History::new(GenerationStats::initial(&config)),
            rng: Self::seeded_rng(config.seed),
            mutation,
            fitness,
            config,
        })
    }

    fn seeded_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
        match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// Discard all state and start over from `config`.
    ///
    /// Nothing is modified when `config` is rejected.
    pub fn initialize(&mut self, config: Configuration) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Start over with the current configuration.
    ///
    /// The RNG is reseeded from the configured seed, so a seeded run replays
    /// the same trajectory after a reset.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        tracing::info!(generation = self.generation(), "resetting simulation");
        self.population = Population::wildtype(
            config.population_size,
            config.genome_length,
            &self.fitness,
        );
        self.history.clear_to(GenerationStats::initial(&config));
        self.rng = Self::seeded_rng(config.seed);
    }

    /// Apply a new configuration.
    ///
    /// A change of genome length or population size reinitializes the run.
    /// Otherwise the mutation rate, the advantage and the selection method are
    /// swapped in place: the population, the generation counter and the
    /// history carry on. The RNG stream carries on too unless the seed
    /// changed, in which case it restarts from the new seed.
    ///
    /// Returns `true` when the run was reinitialized. Nothing is modified when
    /// `config` is rejected.
    pub fn reconfigure(&mut self, config: Configuration) -> Result<bool, ConfigError> {
        if self.config.requires_reinitialization(&config) {
            self.initialize(config)?;
            return Ok(true);
        }

        config.validate()?;
        let mutation = config.mutation_model()?;
        let fitness = config.fitness_model()?;

        tracing::info!(
            generation = self.generation(),
            mutation_rate = config.mutation_rate,
            selection_advantage = config.selection_advantage,
            "reconfigured simulation"
        );

        if config.seed != self.config.seed {
            tracing::debug!(seed = ?config.seed, "reseeding rng");
            self.rng = Self::seeded_rng(config.seed);
        }
        self.population.rescore(&fitness);
        self.mutation = mutation;
        self.fitness = fitness;
        self.config = config;
        Ok(false)
    }

    /// Draw one parent index per offspring slot.
    fn select_parents(&mut self) -> Vec<usize> {
        let weights = self.population.fitness_values();
        let wheel = RouletteWheel::new(&weights, self.config.selection);
        (0..self.config.population_size)
            .map(|_| wheel.select(&mut self.rng))
            .collect()
    }

    /// Copy each selected parent with mutation.
    fn generate_offspring(&mut self, parents: &[usize]) -> Vec<Individual> {
        // One seed per slot, drawn in slot order, keeps the result independent
        // of how rayon schedules the work.
        let seeds: Vec<u64> = (0..parents.len()).map(|_| self.rng.random()).collect();

        let current = self.population.individuals();
        let mutation = &self.mutation;
        let fitness = &self.fitness;

        parents
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&parent, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let genome = mutation.mutate(current[parent].genome(), &mut local_rng);
                Individual::new(genome, fitness)
            })
            .collect()
    }

    /// Advance the simulation by one generation.
    ///
    /// Returns the statistics record of the new generation, which is also
    /// appended to the history.
    pub fn step(&mut self) -> GenerationStats {
        let parents = self.select_parents();
        let offspring = self.generate_offspring(&parents);

        self.population.advance(offspring);

        let stats = GenerationStats::from_population(&self.population, &self.config);
        self.history.push(stats);

        tracing::debug!(
            generation = stats.generation,
            avg_hamming = stats.avg_hamming,
            wildtype_freq = stats.wildtype_freq,
            entropy = stats.entropy,
            "step complete"
        );

        stats
    }

    /// Run `generations` steps.
    ///
    /// Returns the record of the last generation, or `None` when
    /// `generations` is zero.
    pub fn run_for(&mut self, generations: usize) -> Option<GenerationStats> {
        let mut last = None;
        for _ in 0..generations {
            last = Some(self.step());
        }
        last
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Shared handle to the current generation's individuals.
    pub fn snapshot(&self) -> Arc<[Individual]> {
        self.population.snapshot()
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Statistics of the current generation.
    pub fn latest(&self) -> GenerationStats {
        self.history
            .latest()
            .copied()
            .unwrap_or_else(|| GenerationStats::initial(&self.config))
    }

    /// Get reference to the configuration in force.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Threshold diagnostics of the configuration in force.
    pub fn threshold(&self) -> ThresholdMetrics {
        ThresholdMetrics::from_config(&self.config)
    }
}
