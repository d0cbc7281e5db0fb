use crate::base::{FitnessValue, Genome};
use crate::evolution::SinglePeakFitness;

/// An individual of the population: a genome plus its derived fields.
///
/// `Individual` is an immutable value snapshot. The Hamming distance and the
/// fitness are computed once in `new` from the genome and the fitness model
/// in force for that generation; nothing can change them afterwards. Every
/// generation produces a fresh set of individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    /// Mutational load relative to the wildtype (number of `0` sites)
    hamming_distance: usize,
    fitness: FitnessValue,
}

impl Individual {
    /// Create a new `Individual`, deriving its Hamming distance and fitness.
    pub fn new(genome: Genome, fitness: &SinglePeakFitness) -> Self {
        let hamming_distance = genome.hamming_distance();
        Self {
            fitness: fitness.fitness(hamming_distance),
            hamming_distance,
            genome,
        }
    }

    /// The pure-wildtype individual of genome length `len`.
    pub fn wildtype(len: usize, fitness: &SinglePeakFitness) -> Self {
        Self::new(Genome::wildtype(len), fitness)
    }

    #[inline]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    #[inline]
    pub fn hamming_distance(&self) -> usize {
        self.hamming_distance
    }

    #[inline]
    pub fn fitness(&self) -> FitnessValue {
        self.fitness
    }

    /// True for the exact wildtype (Hamming distance 0).
    #[inline]
    pub fn is_wildtype(&self) -> bool {
        self.hamming_distance == 0
    }

    /// Short display label: `★ WT` for the wildtype, `d=k` otherwise.
    pub fn label(&self) -> String {
        if self.is_wildtype() {
            "★ WT".to_string()
        } else {
            format!("d={}", self.hamming_distance)
        }
    }
}
