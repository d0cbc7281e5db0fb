//! Population management.
//!
//! A `Population` is a generation counter plus an immutable snapshot of
//! individuals. Each generation replaces the snapshot wholesale; individuals
//! are never edited in place.

use crate::base::FitnessValue;
use crate::evolution::SinglePeakFitness;
use crate::genome::Individual;
use std::sync::Arc;

/// A fixed-size population of haploid, asexual individuals.
#[derive(Debug, Clone)]
pub struct Population {
    /// Current generation's individuals
    individuals: Arc<[Individual]>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a generation-0 population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals: individuals.into(),
            generation: 0,
        }
    }

    /// `size` copies of the pure wildtype of length `genome_length`.
    pub fn wildtype(size: usize, genome_length: usize, fitness: &SinglePeakFitness) -> Self {
        let founder = Individual::wildtype(genome_length, fitness);
        Self::new(vec![founder; size])
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Shared handle to the current generation.
    ///
    /// The handle stays valid, and unchanged, after the population advances.
    pub fn snapshot(&self) -> Arc<[Individual]> {
        Arc::clone(&self.individuals)
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// The first `n` individuals (fewer if the population is smaller).
    pub fn preview(&self, n: usize) -> &[Individual] {
        &self.individuals[..n.min(self.size())]
    }

    /// Replace the whole population with the next generation.
    pub fn advance(&mut self, offspring: Vec<Individual>) {
        self.individuals = offspring.into();
        self.generation += 1;
    }

    /// Fitness of every individual, in population order.
    pub fn fitness_values(&self) -> Vec<FitnessValue> {
        self.individuals.iter().map(Individual::fitness).collect()
    }

    /// Number of exact-wildtype individuals.
    pub fn wildtype_count(&self) -> usize {
        self.individuals.iter().filter(|i| i.is_wildtype()).count()
    }

    /// Recompute every individual's fitness under a new landscape.
    ///
    /// Produces a new snapshot; the generation counter is unchanged.
    pub fn rescore(&mut self, fitness: &SinglePeakFitness) {
        self.individuals = self
            .individuals
            .iter()
            .map(|ind| Individual::new(ind.genome().clone(), fitness))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Genome;

    fn fitness() -> SinglePeakFitness {
        SinglePeakFitness::new(0.2).unwrap()
    }

    fn individual(bits: &str) -> Individual {
        Individual::new(bits.parse::<Genome>().unwrap(), &fitness())
    }

    #[test]
    fn test_population_wildtype() {
        let pop = Population::wildtype(100, 20, &fitness());
        assert_eq!(pop.size(), 100);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.wildtype_count(), 100);
        assert!(pop
            .individuals()
            .iter()
            .all(|i| i.genome().len() == 20 && i.hamming_distance() == 0));
    }

    #[test]
    fn test_population_empty() {
        let pop = Population::new(Vec::new());
        assert_eq!(pop.size(), 0);
        assert!(pop.is_empty());
        assert!(pop.preview(30).is_empty());
    }

    #[test]
    fn test_population_get_and_preview() {
        let pop = Population::new(vec![individual("11"), individual("01"), individual("00")]);

        assert_eq!(pop.get(1).unwrap().hamming_distance(), 1);
        assert!(pop.get(3).is_none());
        assert_eq!(pop.preview(2).len(), 2);
        assert_eq!(pop.preview(30).len(), 3);
        let distances: Vec<usize> = pop
            .individuals()
            .iter()
            .map(Individual::hamming_distance)
            .collect();
        assert_eq!(distances, vec![0, 1, 2]);
    }

    #[test]
    fn test_advance_replaces_and_counts() {
        let mut pop = Population::new(vec![individual("11"), individual("11")]);
        let before = pop.snapshot();

        pop.advance(vec![individual("10"), individual("00")]);

        assert_eq!(pop.generation(), 1);
        assert_eq!(pop.wildtype_count(), 0);
        // old snapshot is untouched
        assert_eq!(before.len(), 2);
        assert!(before.iter().all(Individual::is_wildtype));
    }

    #[test]
    fn test_fitness_values() {
        let pop = Population::new(vec![individual("111"), individual("101")]);
        let values: Vec<f64> = pop.fitness_values().into_iter().map(f64::from).collect();
        assert_eq!(values, vec![1.2, 1.0]);
    }

    #[test]
    fn test_rescore_applies_new_landscape() {
        let mut pop = Population::new(vec![individual("111"), individual("101")]);
        pop.rescore(&SinglePeakFitness::new(1.0).unwrap());

        assert_eq!(pop.get(0).unwrap().fitness().get(), 2.0);
        assert_eq!(pop.get(1).unwrap().fitness().get(), 1.0);
        assert_eq!(pop.generation(), 0);
    }
}
