//! Selection: the fitness landscape and fitness-proportional parent sampling.
//!
//! ## Fitness landscape
//! The model uses a single-peak landscape. The exact wildtype (Hamming
//! distance 0) has fitness `1 + s`; every other genotype has fitness `1`, no
//! matter how far it has drifted. This isolates the tug-of-war between
//! mutation pressure and one selective peak, which is what produces the error
//! threshold at `L ≈ 1/p`.
//!
//! ## Parent sampling
//! Parents are drawn with probability proportional to fitness (roulette-wheel
//! selection), one independent draw per reproduction slot.

use crate::base::FitnessValue;
use crate::errors::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Single-peak fitness function.
///
/// ```rust
/// # use quasievo_sim::evolution::SinglePeakFitness;
/// let landscape = SinglePeakFitness::new(0.2).unwrap();
/// assert_eq!(landscape.fitness(0).get(), 1.2);
/// assert_eq!(landscape.fitness(7).get(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinglePeakFitness {
    /// Relative advantage `s` of the wildtype
    advantage: f64,
}

impl SinglePeakFitness {
    /// Create a new single-peak landscape.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAdvantage` if `advantage` is negative,
    /// infinite or NaN.
    pub fn new(advantage: f64) -> Result<Self, ConfigError> {
        if !advantage.is_finite() || advantage < 0.0 {
            return Err(ConfigError::InvalidAdvantage(advantage));
        }
        Ok(Self { advantage })
    }

    /// Landscape without selection (every genotype has fitness 1).
    pub fn neutral() -> Self {
        Self { advantage: 0.0 }
    }

    #[inline]
    pub fn advantage(&self) -> f64 {
        self.advantage
    }

    /// Fitness of a genome at the given Hamming distance from the wildtype.
    #[inline]
    pub fn fitness(&self, hamming_distance: usize) -> FitnessValue {
        if hamming_distance == 0 {
            FitnessValue::new(1.0 + self.advantage)
        } else {
            FitnessValue::NEUTRAL
        }
    }
}

impl Default for SinglePeakFitness {
    fn default() -> Self {
        Self::neutral()
    }
}

/// How the roulette wheel locates the selected slot.
///
/// Both strategies give every individual the same selection probability.
/// They differ only in cost and in how floating-point ties resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Subtract each fitness from the draw in population order and take the
    /// first individual where the remainder reaches zero. O(N) per draw.
    #[default]
    LinearScan,
    /// Prefix sums plus binary search. O(log N) per draw after O(N) setup.
    CumulativeSearch,
}

/// Fitness-proportional sampler over one generation's fitness values.
#[derive(Debug, Clone)]
pub struct RouletteWheel<'a> {
    weights: &'a [FitnessValue],
    total: f64,
    /// Inclusive prefix sums, only built for `CumulativeSearch`
    cumulative: Option<Vec<f64>>,
}

impl<'a> RouletteWheel<'a> {
    /// Build a wheel over `weights` (one entry per individual, in
    /// population order).
    pub fn new(weights: &'a [FitnessValue], method: SelectionMethod) -> Self {
        let cumulative: Option<Vec<f64>> = match method {
            SelectionMethod::LinearScan => None,
            SelectionMethod::CumulativeSearch => Some(
                weights
                    .iter()
                    .scan(0.0, |acc, w| {
                        *acc += w.get();
                        Some(*acc)
                    })
                    .collect(),
            ),
        };
        let total = match &cumulative {
            Some(cum) => cum.last().copied().unwrap_or(0.0),
            None => weights.iter().map(|w| w.get()).sum(),
        };

        Self {
            weights,
            total,
            cumulative,
        }
    }

    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Draw one index.
    ///
    /// A wheel with zero total weight cannot be spun; it falls back to the
    /// first individual so a generation can always be completed. The same
    /// fallback applies if rounding leaves the draw unspent after the scan.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if !(self.total > 0.0) {
            tracing::trace!(total = self.total, "degenerate wheel, selecting first individual");
            return 0;
        }

        let r = rng.random::<f64>() * self.total;

        match &self.cumulative {
            None => {
                let mut remainder = r;
                for (i, w) in self.weights.iter().enumerate() {
                    remainder -= w.get();
                    if remainder <= 0.0 {
                        return i;
                    }
                }
                0
            }
            Some(cumulative) => {
                let idx = cumulative.partition_point(|&c| c < r);
                if idx < cumulative.len() {
                    idx
                } else {
                    0
                }
            }
        }
    }
}
