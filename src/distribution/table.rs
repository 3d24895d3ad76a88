//! Tabulation of binomial probabilities over the support `0..=n`

use crate::distribution::operator::ComparisonOperator;
use crate::distribution::parameters::DistributionParameters;
use crate::io::configuration::PMF_LABEL;
use crate::io::error::Result;
use crate::math::probability::binomial_pmf;
use num_traits::ToPrimitive;

/// One support value and the probability tabulated for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityRow {
    /// Support value
    pub k: u64,
    /// Probability in `[0, 1]`
    pub probability: f64,
}

/// Rows for every support value together with the quantity they carry
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    /// Column label such as `P(X = k)`
    pub label: &'static str,
    /// Rows ordered by ascending `k`, exactly `n + 1` of them
    pub rows: Vec<ProbabilityRow>,
}

impl ProbabilityTable {
    /// Sum of all tabulated probabilities
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.probability).sum()
    }
}

/// What to compute for a distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    /// Point probabilities `P(X = k)`
    Pmf,
    /// Cumulative probabilities under an operator
    Cdf {
        /// Comparison to tabulate
        operator: ComparisonOperator,
    },
    /// Quantile lookup at a threshold
    Ppf {
        /// Comparison the quantile inverts
        operator: ComparisonOperator,
        /// Threshold in `[0, 1]`
        q: f64,
    },
}

/// Result of a request
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// PMF or CDF table
    Table(ProbabilityTable),
    /// PPF value
    Quantile(i64),
}

/// Produces tables and quantiles for one validated distribution
#[derive(Debug, Clone, Copy)]
pub struct TableGenerator {
    parameters: DistributionParameters,
}

impl TableGenerator {
    /// Create a generator for the given distribution
    pub const fn new(parameters: DistributionParameters) -> Self {
        Self { parameters }
    }

    /// Distribution this generator tabulates
    pub const fn parameters(&self) -> &DistributionParameters {
        &self.parameters
    }

    /// Point probabilities for `k = 0..=n`
    pub fn pmf(&self) -> ProbabilityTable {
        let n = self.parameters.trials();
        let p = self.parameters.probability();
        log::debug!("tabulating PMF of {}", self.parameters);

        let rows = (0..=n)
            .map(|k| ProbabilityRow {
                k,
                probability: binomial_pmf(k, n, p),
            })
            .collect();

        ProbabilityTable {
            label: PMF_LABEL,
            rows,
        }
    }

    /// Cumulative probabilities under `operator` for `k = 0..=n`
    pub fn cdf(&self, operator: ComparisonOperator) -> ProbabilityTable {
        log::debug!("tabulating CDF ({operator}) of {}", self.parameters);

        let rows = (0..=self.parameters.trials())
            .map(|k| ProbabilityRow {
                k,
                probability: operator.probability(k.to_i64().unwrap_or(i64::MAX), &self.parameters),
            })
            .collect();

        ProbabilityTable {
            label: operator.label(),
            rows,
        }
    }

    /// Quantile of `operator` at threshold `q`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `q` is NaN or outside `[0, 1]`
    pub fn ppf(&self, q: f64, operator: ComparisonOperator) -> Result<i64> {
        let quantile = operator.quantile(q, &self.parameters)?;
        log::debug!("PPF ({operator}) at q={q} of {} is {quantile}", self.parameters);
        Ok(quantile)
    }

    /// Dispatch a request to the matching mode
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a PPF request with `q` outside `[0, 1]`
    pub fn generate(&self, request: &Request) -> Result<Output> {
        match *request {
            Request::Pmf => Ok(Output::Table(self.pmf())),
            Request::Cdf { operator } => Ok(Output::Table(self.cdf(operator))),
            Request::Ppf { operator, q } => self.ppf(q, operator).map(Output::Quantile),
        }
    }
}
