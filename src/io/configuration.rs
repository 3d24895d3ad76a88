//! Command-line defaults and numeric constants

/// Binary name shown in usage output
pub const PROGRAM_NAME: &str = "statica";

/// Header of the support column in rendered tables
pub const SUPPORT_COLUMN_HEADER: &str = "k";

/// Column label for point probabilities
pub const PMF_LABEL: &str = "P(X = k)";

// Derived probabilities (`1 - x`) may leave [0, 1] by a few ulps
/// Absolute tolerance for probability comparisons
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Convergence threshold on the last factor of the incomplete beta continued fraction
pub const CONTINUED_FRACTION_TOLERANCE: f64 = 1e-15;

// Terms needed grow with sqrt(n): about 4000 at n = 1e9
/// Upper bound on continued fraction terms per cumulative evaluation
pub const MAX_CONTINUED_FRACTION_TERMS: u32 = 1_000_000;

/// Significant digits printed when `--digits` is not given
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Largest accepted value for `--digits`
pub const MAX_DISPLAY_DIGITS: usize = 17;

/// Character used for the rule between header and rows
pub const RULE_CHAR: char = '-';

/// Spaces between the two table columns
pub const COLUMN_GAP: usize = 2;
