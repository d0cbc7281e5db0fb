use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative fitness value.
///
/// Fitness here is a relative reproductive weight, not a probability, so
/// values above 1.0 are legal (the wildtype carries `1 + s`). Negative and NaN
/// inputs are clamped to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Fitness that can never be selected.
    pub const ZERO: FitnessValue = FitnessValue(0.0);

    /// Baseline fitness of every non-wildtype genome.
    pub const NEUTRAL: FitnessValue = FitnessValue(1.0);

    /// Creates a new FitnessValue, clamping negative or NaN input to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.max(0.0))
        }
    }

    /// Returns the inner f64 value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for FitnessValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FitnessValue(self.0 + rhs.0)
    }
}

impl Sum for FitnessValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FitnessValue::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a FitnessValue> for FitnessValue {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
