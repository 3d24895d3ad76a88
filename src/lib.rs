//! Binomial distribution tables for the command line
//!
//! Point probabilities, cumulative probabilities under the four comparison
//! operators and quantile lookups, all derived from one left-cumulative
//! primitive evaluated through the regularized incomplete beta function
//! continued fraction.

#![forbid(unsafe_code)]

/// Validated parameters, comparison operators and table generation
pub mod distribution;
/// Command-line interface, rendering, logging and error handling
pub mod io;
/// Binomial mass, cumulative and quantile kernels
pub mod math;

pub use distribution::operator::ComparisonOperator;
pub use distribution::parameters::DistributionParameters;
pub use distribution::table::{Output, ProbabilityRow, ProbabilityTable, Request, TableGenerator};
pub use io::error::{DistributionError, Result};
