//! Terminal logger configured from the repeated `-v` flag

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Map a `-v` occurrence count to a log level
///
/// No flag keeps warnings only; each repetition raises verbosity by one
/// level up to `trace`.
pub const fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the terminal logger on stderr
///
/// Returns `false` when a logger was already installed, which leaves the
/// existing one in place.
pub fn init_logging(verbosity: u8) -> bool {
    TermLogger::init(
        level_filter(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_ok()
}
