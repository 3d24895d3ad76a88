//! Cumulative comparison operators over the binomial support
//!
//! Every operator is derived from the single left-cumulative primitive
//! `LEQ(k) = P(X <= k)`:
//!
//! | operator | probability        | quantile         |
//! |----------|--------------------|------------------|
//! | `lt`     | `LEQ(k - 1)`       | `QLEQ(q) + 1`    |
//! | `gt`     | `1 - LEQ(k)`       | `QGEQ(q) - 1`    |
//! | `leq`    | `LEQ(k)`           | `QLEQ(q)`        |
//! | `geq`    | `1 - LEQ(k - 1)`   | `QLEQ(1 - q)`    |

use crate::distribution::parameters::DistributionParameters;
use crate::io::error::{DistributionError, Result, invalid_operator, invalid_parameter};
use crate::math::probability::{binomial_cdf, binomial_quantile, clamp_probability};
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// Comparison between the random variable `X` and a support value `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonOperator {
    /// `P(X < k)`
    LessThan,
    /// `P(X > k)`
    GreaterThan,
    /// `P(X <= k)`
    #[default]
    LessOrEqual,
    /// `P(X >= k)`
    GreaterOrEqual,
}

impl ComparisonOperator {
    /// All operators in display order
    pub const ALL: [Self; 4] = [
        Self::LessThan,
        Self::GreaterThan,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
    ];

    /// Short tag used on the command line
    pub const fn tag(self) -> &'static str {
        match self {
            Self::LessThan => "lt",
            Self::GreaterThan => "gt",
            Self::LessOrEqual => "leq",
            Self::GreaterOrEqual => "geq",
        }
    }

    /// Column label describing the tabulated quantity
    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThan => "P(X < k)",
            Self::GreaterThan => "P(X > k)",
            Self::LessOrEqual => "P(X ≤ k)",
            Self::GreaterOrEqual => "P(X ≥ k)",
        }
    }

    /// Probability of the comparison holding at `k`
    ///
    /// `k` may lie outside the support; `LT(0)` is 0 because `LEQ(-1)` is.
    pub fn probability(self, k: i64, parameters: &DistributionParameters) -> f64 {
        let n = parameters.trials();
        let p = parameters.probability();
        let leq = |k: i64| binomial_cdf(k, n, p);

        let value = match self {
            Self::LessOrEqual => leq(k),
            Self::LessThan => leq(k.saturating_sub(1)),
            Self::GreaterThan => 1.0 - leq(k),
            Self::GreaterOrEqual => 1.0 - leq(k.saturating_sub(1)),
        };

        clamp_probability(value)
    }

    /// Quantile of the comparison at threshold `q`
    ///
    /// The result is signed: `lt` can reach `n + 1` and `gt` can reach `-1`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `q` is NaN or outside `[0, 1]`
    pub fn quantile(self, q: f64, parameters: &DistributionParameters) -> Result<i64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(invalid_parameter(
                "q",
                &q,
                &"must be a probability in [0, 1]",
            ));
        }

        let n = parameters.trials();
        let p = parameters.probability();
        let qleq = |q: f64| -> Result<i64> {
            let k = binomial_quantile(q, n, p);
            k.to_i64().ok_or_else(|| {
                invalid_parameter("n", &n, &"quantile does not fit a signed 64-bit integer")
            })
        };

        let k = match self {
            Self::LessOrEqual => qleq(q)?,
            Self::LessThan => qleq(q)?.saturating_add(1),
            Self::GreaterOrEqual => qleq(1.0 - q)?,
            Self::GreaterThan => qleq(1.0 - q)?.saturating_sub(1),
        };

        Ok(k)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComparisonOperator {
    type Err = DistributionError;

    fn from_str(tag: &str) -> Result<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|operator| operator.tag() == normalized)
            .ok_or_else(|| invalid_operator(&tag))
    }
}
