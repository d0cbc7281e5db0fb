//! Point mutation on binary genomes.
//!
//! Every site of an offspring genome flips independently with the per-site
//! probability `p` (1 → 0 or 0 → 1). There is no linkage between sites and no
//! bias between forward and back mutation: the flip is symmetric. The
//! expected number of flips per genome per generation is the mutation load
//! `L · p`.

use crate::base::Genome;
use crate::errors::ConfigError;
use rand::distr::{Bernoulli, Distribution};
use rand::Rng;

/// Symmetric per-site flip model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationModel {
    rate: f64,
    flip: Bernoulli,
}

impl MutationModel {
    /// Create a mutation model with per-site flip probability `rate`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidMutationRate` unless `0.0 <= rate <= 1.0`.
    pub fn new(rate: f64) -> Result<Self, ConfigError> {
        let flip = Bernoulli::new(rate).map_err(|_| ConfigError::InvalidMutationRate(rate))?;
        Ok(Self { rate, flip })
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Expected number of flips per genome of length `genome_length`.
    pub fn expected_mutations(&self, genome_length: usize) -> f64 {
        genome_length as f64 * self.rate
    }

    /// Produce a mutated copy of `genome`.
    ///
    /// The input is never modified. With a zero rate the returned genome
    /// shares storage with the input.
    pub fn mutate<R: Rng + ?Sized>(&self, genome: &Genome, rng: &mut R) -> Genome {
        if self.rate == 0.0 {
            return genome.clone();
        }

        genome
            .iter()
            .map(|allele| {
                if self.flip.sample(rng) {
                    allele.flip()
                } else {
                    allele
                }
            })
            .collect()
    }
}
