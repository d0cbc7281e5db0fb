//! Per-generation summary statistics.
//!
//! Each generation is summarised by a `GenerationStats` record: the mean
//! Hamming distance, the wildtype frequency, the mutation load, the
//! information rate and the Shannon entropy of the Hamming-distance
//! distribution.

use crate::genome::Individual;
use crate::simulation::{Configuration, Population};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// Mean Hamming distance from the wildtype
    pub avg_hamming: f64,
    /// Fraction of individuals that are exact wildtype
    pub wildtype_freq: f64,
    /// `L · p`, a property of the configuration
    pub mutation_load: f64,
    /// `wildtype_freq · L`
    pub information_rate: f64,
    /// Shannon entropy (bits) of the Hamming-distance distribution
    pub entropy: f64,
}

impl GenerationStats {
    /// The record describing a freshly initialized, all-wildtype population.
    pub fn initial(config: &Configuration) -> Self {
        Self {
            generation: 0,
            avg_hamming: 0.0,
            wildtype_freq: 1.0,
            mutation_load: config.mutation_load(),
            information_rate: config.genome_length as f64,
            entropy: 0.0,
        }
    }

    /// Summarise the current generation of `population`.
    pub fn from_population(population: &Population, config: &Configuration) -> Self {
        Self::from_individuals(population.generation(), population.individuals(), config)
    }

    /// Summarise `individuals` as generation `generation`.
    ///
    /// An empty slice yields all-zero population statistics.
    pub fn from_individuals(
        generation: usize,
        individuals: &[Individual],
        config: &Configuration,
    ) -> Self {
        let n = individuals.len();
        let mutation_load = config.mutation_load();
        if n == 0 {
            return Self {
                generation,
                avg_hamming: 0.0,
                wildtype_freq: 0.0,
                mutation_load,
                information_rate: 0.0,
                entropy: 0.0,
            };
        }

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        let mut total_hamming = 0usize;
        for ind in individuals {
            total_hamming += ind.hamming_distance();
            *counts.entry(ind.hamming_distance()).or_insert(0) += 1;
        }

        let wildtype_count = counts.get(&0).copied().unwrap_or(0);
        let wildtype_freq = wildtype_count as f64 / n as f64;

        Self {
            generation,
            avg_hamming: total_hamming as f64 / n as f64,
            wildtype_freq,
            mutation_load,
            information_rate: wildtype_freq * config.genome_length as f64,
            entropy: shannon_entropy(counts.values().copied(), n),
        }
    }

    /// Entropy as a fraction of its maximum `log2(population_size)`.
    ///
    /// Returns 0.0 for a population of one, where no diversity is possible.
    pub fn normalized_entropy(&self, population_size: usize) -> f64 {
        if population_size <= 1 {
            return 0.0;
        }
        self.entropy / (population_size as f64).log2()
    }

    /// Number of exact-wildtype genomes implied by the frequency.
    pub fn perfect_genomes(&self, population_size: usize) -> usize {
        (self.wildtype_freq * population_size as f64).round() as usize
    }
}

/// Shannon entropy in bits of a discrete distribution given as raw counts.
///
/// Zero counts contribute nothing. A `total` of zero yields 0.0.
///
/// ```rust
/// # use quasievo_sim::simulation::shannon_entropy;
/// assert_eq!(shannon_entropy([5, 5], 10), 1.0);
/// assert_eq!(shannon_entropy([10], 10), 0.0);
/// ```
pub fn shannon_entropy<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let h: f64 = counts
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let prob = c as f64 / total;
            prob * prob.log2()
        })
        .sum();
    // subtracting from +0.0 keeps a single-class result from being -0.0;
    // rounding can leave a tiny negative value
    (0.0 - h).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Genome;
    use crate::evolution::SinglePeakFitness;

    fn individuals(bits: &[&str]) -> Vec<Individual> {
        let fitness = SinglePeakFitness::new(0.2).unwrap();
        bits.iter()
            .map(|b| Individual::new(b.parse::<Genome>().unwrap(), &fitness))
            .collect()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_initial_record() {
        let config = Configuration::new(20, 0.05, 0.2, 100);
        let stats = GenerationStats::initial(&config);

        assert_eq!(stats.generation, 0);
        assert_eq!(stats.avg_hamming, 0.0);
        assert_eq!(stats.wildtype_freq, 1.0);
        assert!(approx_eq(stats.mutation_load, 1.0));
        assert_eq!(stats.information_rate, 20.0);
        assert_eq!(stats.entropy, 0.0);
    }

    #[test]
    fn test_from_individuals_mixed_population() {
        let config = Configuration::new(4, 0.1, 0.2, 4);
        // distances: 0, 0, 1, 3
        let pop = individuals(&["1111", "1111", "1101", "0001"]);
        let stats = GenerationStats::from_individuals(7, &pop, &config);

        assert_eq!(stats.generation, 7);
        assert!(approx_eq(stats.avg_hamming, 1.0));
        assert!(approx_eq(stats.wildtype_freq, 0.5));
        assert!(approx_eq(stats.mutation_load, 0.4));
        assert!(approx_eq(stats.information_rate, 2.0));
        // p = {0.5, 0.25, 0.25} -> 1.5 bits
        assert!(approx_eq(stats.entropy, 1.5));
    }

    #[test]
    fn test_from_population_uses_generation_counter() {
        let config = Configuration::new(2, 0.1, 0.2, 2);
        let mut pop = Population::new(individuals(&["11", "11"]));
        pop.advance(individuals(&["11", "01"]));

        let stats = GenerationStats::from_population(&pop, &config);
        assert_eq!(stats.generation, 1);
        assert!(approx_eq(stats.wildtype_freq, 0.5));
        assert!(approx_eq(stats.entropy, 1.0));
    }

    #[test]
    fn test_uniform_population_has_zero_entropy() {
        let config = Configuration::new(3, 0.5, 0.0, 3);
        let pop = individuals(&["101", "011", "110"]);
        let stats = GenerationStats::from_individuals(1, &pop, &config);

        assert_eq!(stats.entropy, 0.0);
        assert_eq!(stats.wildtype_freq, 0.0);
        assert_eq!(stats.information_rate, 0.0);
        assert!(approx_eq(stats.avg_hamming, 1.0));
    }

    #[test]
    fn test_entropy_reaches_log2_n_when_all_distinct() {
        let config = Configuration::new(3, 0.5, 0.0, 4);
        let pop = individuals(&["111", "110", "100", "000"]);
        let stats = GenerationStats::from_individuals(1, &pop, &config);

        assert!(approx_eq(stats.entropy, 2.0));
        assert!(approx_eq(stats.normalized_entropy(4), 1.0));
    }

    #[test]
    fn test_empty_population() {
        let config = Configuration::default();
        let stats = GenerationStats::from_individuals(3, &[], &config);
        assert_eq!(stats.wildtype_freq, 0.0);
        assert_eq!(stats.entropy, 0.0);
        assert!(approx_eq(stats.mutation_load, 1.0));
    }

    #[test]
    fn test_shannon_entropy() {
        assert_eq!(shannon_entropy([4], 4), 0.0);
        assert!(approx_eq(shannon_entropy([1, 1, 1, 1], 4), 2.0));
        assert!(approx_eq(shannon_entropy([2, 0, 2], 4), 1.0));
        assert_eq!(shannon_entropy(Vec::<usize>::new(), 0), 0.0);
    }

    #[test]
    fn test_single_class_entropy_is_positive_zero() {
        let h = shannon_entropy([7], 7);
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());

        let config = Configuration::new(5, 0.0, 0.2, 3);
        let stats = GenerationStats::from_individuals(1, &individuals(&["11111"; 3]), &config);
        assert!(stats.entropy.is_sign_positive());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"entropy\":0.0"), "{json}");
    }

    #[test]
    fn test_display_helpers() {
        let stats = GenerationStats {
            generation: 1,
            avg_hamming: 1.0,
            wildtype_freq: 0.333,
            mutation_load: 1.0,
            information_rate: 6.66,
            entropy: 1.0,
        };
        assert_eq!(stats.perfect_genomes(100), 33);
        assert_eq!(stats.normalized_entropy(1), 0.0);
        assert!(approx_eq(stats.normalized_entropy(2), 1.0));
    }
}
