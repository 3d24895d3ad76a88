//! Tests for command-line parsing, operator selection and request execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use statica::io::cli::{BinomialCommand, Cli, Command, Runner, parse_digits};
    use statica::{ComparisonOperator, DistributionError, Request};

    fn binomial(args: &[&str]) -> BinomialCommand {
        let cli = Cli::parse_from(args.iter().copied());
        let Command::Binomial(command) = cli.command;
        command
    }

    fn run(args: &[&str]) -> (statica::Result<()>, String) {
        let runner = Runner::new(Cli::parse_from(args.iter().copied()));
        let mut buffer = Vec::new();
        let result = runner.run_to(&mut buffer);
        (result, String::from_utf8(buffer).unwrap())
    }

    // Tests PMF parsing with the short parameter flags
    // Verified by changing the short flag definitions
    #[test]
    fn test_parse_pmf() {
        let invocation = binomial(&["statica", "binomial", "pmf", "-n", "10", "-p", "0.5"])
            .invocation()
            .unwrap();

        assert_eq!(invocation.parameters.trials(), 10);
        assert_eq!(invocation.request, Request::Pmf);
        assert_eq!(invocation.digits, None);
    }

    // Tests the CDF operator defaults to leq
    // Verified by changing the default variant
    #[test]
    fn test_cdf_default_operator() {
        let invocation = binomial(&["statica", "binomial", "cdf", "--n", "4", "--p", "0.1"])
            .invocation()
            .unwrap();

        assert_eq!(
            invocation.request,
            Request::Cdf {
                operator: ComparisonOperator::LessOrEqual
            }
        );
    }

    // Tests operator shorthands and the explicit operator option
    // Verified by resolving shorthands in the wrong order
    #[test]
    fn test_operator_selection() {
        let cases = [
            ("--lt", ComparisonOperator::LessThan),
            ("--gt", ComparisonOperator::GreaterThan),
            ("--leq", ComparisonOperator::LessOrEqual),
            ("--geq", ComparisonOperator::GreaterOrEqual),
        ];

        for (flag, expected) in cases {
            let invocation =
                binomial(&["statica", "binomial", "cdf", "-n", "3", "-p", "0.5", flag])
                    .invocation()
                    .unwrap();
            assert_eq!(invocation.request, Request::Cdf { operator: expected });
        }

        let invocation = binomial(&[
            "statica", "binomial", "ppf", "-n", "3", "-p", "0.5", "-q", "0.2", "-o", "GT",
        ])
        .invocation()
        .unwrap();
        assert_eq!(
            invocation.request,
            Request::Ppf {
                operator: ComparisonOperator::GreaterThan,
                q: 0.2
            }
        );
    }

    // Tests two operator choices together are rejected
    // Verified by allowing multiple members in the operator group
    #[test]
    fn test_conflicting_operators_rejected() {
        let shorthands = Cli::try_parse_from([
            "statica", "binomial", "cdf", "-n", "3", "-p", "0.5", "--lt", "--gt",
        ]);
        assert!(shorthands.is_err());

        let mixed = Cli::try_parse_from([
            "statica", "binomial", "cdf", "-n", "3", "-p", "0.5", "--operator", "lt", "--geq",
        ]);
        assert!(mixed.is_err());
    }

    // Tests unknown operator tags go through the custom parser
    // Verified by parsing tags with a permissive fallback
    #[test]
    fn test_unknown_operator_rejected() {
        let error = Cli::try_parse_from([
            "statica", "binomial", "cdf", "-n", "3", "-p", "0.5", "-o", "bogus",
        ])
        .unwrap_err();

        assert!(error.to_string().contains("Invalid operator 'bogus'"));
    }

    // Tests negative trial counts reach validation instead of the parser
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_negative_trials_reach_validation() {
        let result = binomial(&["statica", "binomial", "pmf", "-n", "-3", "-p", "0.5"]).invocation();

        assert!(matches!(
            result,
            Err(DistributionError::InvalidParameter { parameter: "n", .. })
        ));
    }

    // Tests verbosity counting and the global flag position
    // Verified by making the flag non-global
    #[test]
    fn test_verbosity() {
        let quiet = Cli::parse_from(["statica", "binomial", "pmf", "-n", "1", "-p", "0.5"]);
        assert_eq!(quiet.verbose, 0);

        let top = Cli::parse_from(["statica", "-v", "binomial", "pmf", "-n", "1", "-p", "0.5"]);
        assert_eq!(top.verbose, 1);

        let nested = Cli::parse_from(["statica", "binomial", "pmf", "-vv", "-n", "1", "-p", "0.5"]);
        assert_eq!(nested.verbose, 2);
    }

    // Tests the digits parser bounds
    // Verified by removing the upper bound
    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("4").unwrap(), 4);
        assert_eq!(parse_digits(" 0 ").unwrap(), 0);
        assert!(parse_digits("18").is_err());
        assert!(parse_digits("-1").is_err());
        assert!(parse_digits("many").is_err());
    }

    // Tests full PMF output with fixed decimals
    // Verified by swapping column alignment
    #[test]
    fn test_run_pmf_output() {
        let (result, output) = run(&[
            "statica", "binomial", "pmf", "-n", "2", "-p", "0.5", "--digits", "4",
        ]);

        assert!(result.is_ok());
        assert_eq!(
            output,
            "k  P(X = k)\n-  --------\n0  0.2500\n1  0.5000\n2  0.2500\n"
        );
    }

    // Tests PPF output is the bare integer
    // Verified by rendering the quantile as a table
    #[test]
    fn test_run_ppf_output() {
        let (result, output) = run(&[
            "statica", "binomial", "ppf", "-n", "10", "-p", "0.5", "-q", "0.5",
        ]);

        assert!(result.is_ok());
        assert_eq!(output, "5\n");
    }

    // Tests invalid requests produce no output at all
    // Verified by writing the header before validation
    #[test]
    fn test_run_invalid_writes_nothing() {
        let (result, output) = run(&["statica", "binomial", "cdf", "-n", "10", "-p", "1.5"]);

        assert!(matches!(
            result,
            Err(DistributionError::InvalidParameter { parameter: "p", .. })
        ));
        assert!(output.is_empty());

        let (result, output) = run(&[
            "statica", "binomial", "ppf", "-n", "10", "-p", "0.5", "-q", "-0.5",
        ]);
        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
