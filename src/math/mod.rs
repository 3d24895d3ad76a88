//! Numeric kernels for the binomial distribution

/// Binomial mass, cumulative and inverse-cumulative functions
pub mod probability;
