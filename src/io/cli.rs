//! Command-line interface for binomial distribution tables

use crate::distribution::operator::ComparisonOperator;
use crate::distribution::parameters::DistributionParameters;
use crate::distribution::table::{Request, TableGenerator};
use crate::io::configuration::{MAX_DISPLAY_DIGITS, PROGRAM_NAME};
use crate::io::error::{Result, invalid_parameter};
use crate::io::render::render_output;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(
    author,
    version,
    about = "Point, cumulative and quantile tables of discrete distributions"
)]
/// Command-line arguments for the table tool
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Distribution family to tabulate
    #[command(subcommand)]
    pub command: Command,
}

/// Distribution families
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Binomial distribution with n trials and success probability p
    #[command(subcommand)]
    Binomial(BinomialCommand),
}

/// Modes of the binomial subcommand
#[derive(Subcommand, Debug)]
pub enum BinomialCommand {
    /// Point probabilities P(X = k) for k = 0..=n
    Pmf {
        /// Distribution parameters
        #[command(flatten)]
        distribution: DistributionArgs,

        /// Output formatting
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Cumulative probabilities for k = 0..=n under a comparison operator
    Cdf {
        /// Distribution parameters
        #[command(flatten)]
        distribution: DistributionArgs,

        /// Comparison operator
        #[command(flatten)]
        operator: OperatorArgs,

        /// Output formatting
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Smallest k at which the chosen cumulative probability reaches q
    Ppf {
        /// Distribution parameters
        #[command(flatten)]
        distribution: DistributionArgs,

        /// Comparison operator
        #[command(flatten)]
        operator: OperatorArgs,

        /// Probability threshold in [0, 1]
        #[arg(short, long, allow_negative_numbers = true)]
        q: f64,
    },
}

/// Trial count and success probability as typed on the command line
///
/// Range checks are left to [`DistributionParameters::new`] so that every
/// invalid value is reported through the same error.
#[derive(Args, Debug, Clone, Copy)]
pub struct DistributionArgs {
    /// Number of trials
    #[arg(short, long, allow_negative_numbers = true)]
    pub n: i64,

    /// Probability of a single success
    #[arg(short, long, allow_negative_numbers = true)]
    pub p: f64,
}

/// Operator choice: `--operator <TAG>` or one of its shorthands
///
/// All members share one group, so combining e.g. `--lt --gt` is rejected.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(id = "operator_choice", multiple = false)]
pub struct OperatorArgs {
    /// Comparison operator: lt, gt, leq or geq [default: leq]
    #[arg(short, long, value_parser = parse_operator)]
    pub operator: Option<ComparisonOperator>,

    /// Shorthand for --operator lt
    #[arg(long)]
    pub lt: bool,

    /// Shorthand for --operator gt
    #[arg(long)]
    pub gt: bool,

    /// Shorthand for --operator leq
    #[arg(long)]
    pub leq: bool,

    /// Shorthand for --operator geq
    #[arg(long)]
    pub geq: bool,
}

impl OperatorArgs {
    /// Selected operator, `leq` when nothing was given
    pub fn resolve(&self) -> ComparisonOperator {
        if self.lt {
            ComparisonOperator::LessThan
        } else if self.gt {
            ComparisonOperator::GreaterThan
        } else if self.leq {
            ComparisonOperator::LessOrEqual
        } else if self.geq {
            ComparisonOperator::GreaterOrEqual
        } else {
            self.operator.unwrap_or_default()
        }
    }
}

/// Probability formatting options
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// Decimal places for probabilities (6 significant digits if omitted)
    #[arg(short, long, value_parser = parse_digits)]
    pub digits: Option<usize>,
}

/// Parse an operator tag
///
/// # Errors
///
/// Returns `InvalidOperator` for tags other than lt, gt, leq, geq
pub fn parse_operator(tag: &str) -> Result<ComparisonOperator> {
    tag.parse()
}

/// Parse the number of displayed decimal places
///
/// # Errors
///
/// Returns `InvalidParameter` for non-numeric input or more than
/// [`MAX_DISPLAY_DIGITS`] places
pub fn parse_digits(value: &str) -> Result<usize> {
    let digits: usize = value
        .trim()
        .parse()
        .map_err(|error| invalid_parameter("digits", &value, &error))?;

    if digits > MAX_DISPLAY_DIGITS {
        return Err(invalid_parameter(
            "digits",
            &digits,
            &format!("must be at most {MAX_DISPLAY_DIGITS}"),
        ));
    }

    Ok(digits)
}

/// Validated parameters, request and formatting for one run
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    /// Distribution to evaluate
    pub parameters: DistributionParameters,
    /// Mode and its operator/threshold
    pub request: Request,
    /// Decimal places for probabilities
    pub digits: Option<usize>,
}

impl BinomialCommand {
    /// Validate the arguments into an invocation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` is negative or `p` lies outside
    /// `[0, 1]`
    pub fn invocation(&self) -> Result<Invocation> {
        let (distribution, request, digits) = match *self {
            Self::Pmf {
                distribution,
                display,
            } => (distribution, Request::Pmf, display.digits),
            Self::Cdf {
                distribution,
                operator,
                display,
            } => (
                distribution,
                Request::Cdf {
                    operator: operator.resolve(),
                },
                display.digits,
            ),
            Self::Ppf {
                distribution,
                operator,
                q,
            } => (
                distribution,
                Request::Ppf {
                    operator: operator.resolve(),
                    q,
                },
                None,
            ),
        };

        Ok(Invocation {
            parameters: DistributionParameters::new(distribution.n, distribution.p)?,
            request,
            digits,
        })
    }
}

/// Executes a parsed command line and writes the result
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against standard output
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or stdout cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_to(&mut handle)
    }

    /// Run and write the rendered result to `writer`
    ///
    /// Nothing is written unless the whole request succeeds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for out-of-range inputs and `Output` if
    /// writing fails
    pub fn run_to(&self, writer: &mut impl Write) -> Result<()> {
        let Command::Binomial(command) = &self.cli.command;
        let invocation = command.invocation()?;

        let parameters = invocation.parameters;
        log::info!(
            "{parameters}: mean {}, variance {}, std dev {}",
            parameters.mean(),
            parameters.variance(),
            parameters.std_dev()
        );

        let output = TableGenerator::new(parameters).generate(&invocation.request)?;
        let rendered = render_output(&output, invocation.digits);

        writeln!(writer, "{rendered}")?;
        writer.flush()?;
        Ok(())
    }
}
