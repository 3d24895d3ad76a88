//! Binomial distribution parameters, comparison operators and table generation

/// Comparison operators derived from the left-cumulative probability
pub mod operator;
/// Validated trial count and success probability
pub mod parameters;
/// Tabulation of probabilities over the support
pub mod table;
