/// Command-line parsing and request execution
pub mod cli;
/// Defaults and numeric constants
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// Logger setup from the verbosity flag
pub mod logging;
/// Plain-text rendering of tables and quantiles
pub mod render;
