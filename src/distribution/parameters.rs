//! Validated binomial distribution parameters

use crate::io::error::{Result, invalid_parameter};
use num_traits::ToPrimitive;
use std::fmt;

/// Trial count `n` and success probability `p` of a binomial distribution
///
/// Immutable once constructed; `n >= 0` and `0 <= p <= 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParameters {
    trials: u64,
    probability: f64,
}

impl DistributionParameters {
    /// Validate and construct parameters
    ///
    /// Both bounds of `p` are inclusive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `trials` is negative or `probability`
    /// is NaN or outside `[0, 1]`
    pub fn new(trials: i64, probability: f64) -> Result<Self> {
        let trials = trials
            .to_u64()
            .ok_or_else(|| invalid_parameter("n", &trials, &"must be a non-negative integer"))?;

        if !(0.0..=1.0).contains(&probability) {
            return Err(invalid_parameter(
                "p",
                &probability,
                &"must be a probability in [0, 1]",
            ));
        }

        Ok(Self {
            trials,
            probability,
        })
    }

    /// Number of trials `n`
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    /// Success probability of a single trial `p`
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Expected number of successes `np`
    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.probability
    }

    /// Variance `np(1 - p)`
    pub fn variance(&self) -> f64 {
        self.mean() * (1.0 - self.probability)
    }

    /// Standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl fmt::Display for DistributionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binomial(n={}, p={})", self.trials, self.probability)
    }
}
