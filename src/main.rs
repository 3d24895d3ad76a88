//! CLI entry point for binomial distribution tables

use clap::Parser;
use statica::io::cli::{Cli, Runner};
use statica::io::error::report;
use statica::io::logging::init_logging;
use std::process::ExitCode;

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match Runner::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", report(&error));
            ExitCode::FAILURE
        }
    }
}
