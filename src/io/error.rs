//! Error types for parameter validation, operator parsing and output

use crate::io::configuration::PROGRAM_NAME;
use std::fmt;

/// Main error type for all distribution requests
#[derive(Debug)]
pub enum DistributionError {
    /// A distribution or query parameter failed validation
    ///
    /// Raised for a negative trial count, or a success probability or
    /// quantile threshold outside `[0, 1]`
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Comparison operator tag outside the closed set `lt`, `gt`, `leq`, `geq`
    InvalidOperator {
        /// The unrecognized tag as supplied
        tag: String,
    },

    /// Writing the rendered result failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidOperator { tag } => {
                write!(
                    f,
                    "Invalid operator '{tag}': expected one of lt, gt, leq, geq"
                )
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for DistributionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DistributionError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for distribution results
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DistributionError {
    DistributionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid operator error
pub fn invalid_operator(tag: &impl ToString) -> DistributionError {
    DistributionError::InvalidOperator {
        tag: tag.to_string(),
    }
}

/// One-line message for reporting a failed run on stderr
pub fn report(error: &DistributionError) -> String {
    format!("{PROGRAM_NAME}: {error}")
}
