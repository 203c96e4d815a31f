//! CLI argument definitions.

use basecalc_core::{Matrix, Operation, Radix};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "basecalc",
    version,
    about = "Number-base conversion, radix arithmetic and matrix algebra",
    long_about = "Convert numbers between binary, octal, decimal and hexadecimal,\n\
                  do integer arithmetic within one base, and add, subtract,\n\
                  multiply or take determinants of small matrices.\n\n\
                  Matrices are written row by row: cells separated by commas or\n\
                  spaces, rows by semicolons (\"1,2;3,4\")."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Print results as JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a number in all four bases.
    Convert {
        /// Digits to convert.
        value: String,

        /// Base the value is written in (binary, octal, decimal, hex).
        #[arg(long, short, default_value = "decimal")]
        from: Radix,
    },

    /// Add, subtract, multiply or divide two numbers in one base.
    Calc {
        left: String,

        /// One of: add, sub, mul, div (or + - * /).
        #[arg(allow_hyphen_values = true)]
        op: Operation,

        right: String,

        #[arg(long, short, default_value = "decimal")]
        radix: Radix,
    },

    /// Matrix operations.
    #[command(subcommand)]
    Matrix(MatrixCommand),

    /// Interactive session with history.
    Repl,
}

#[derive(Subcommand)]
pub enum MatrixCommand {
    /// A + B
    Add(MatrixPair),

    /// A - B
    Sub(MatrixPair),

    /// A × B
    Mul(MatrixPair),

    /// Determinant of a square matrix.
    Det {
        #[arg(allow_hyphen_values = true)]
        a: Matrix<f64>,

        /// Use LU decomposition instead of cofactor expansion.
        #[arg(long)]
        lu: bool,
    },
}

#[derive(clap::Args)]
pub struct MatrixPair {
    #[arg(allow_hyphen_values = true)]
    pub a: Matrix<f64>,

    #[arg(allow_hyphen_values = true)]
    pub b: Matrix<f64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli =
            Cli::try_parse_from(["basecalc", "calc", "ff", "+", "1", "--radix", "hex"]).unwrap();
        match cli.command {
            Command::Calc {
                left,
                op,
                right,
                radix,
            } => {
                assert_eq!(left, "ff");
                assert_eq!(op, Operation::Add);
                assert_eq!(right, "1");
                assert_eq!(radix, Radix::Hexadecimal);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_parse_matrix_det() {
        let cli = Cli::try_parse_from(["basecalc", "matrix", "det", "1,2;3,4", "--lu"]).unwrap();
        match cli.command {
            Command::Matrix(MatrixCommand::Det { a, lu }) => {
                assert_eq!(a.shape(), (2, 2));
                assert!(lu);
            }
            _ => panic!("expected matrix det"),
        }
    }

    #[test]
    fn test_negative_matrix_cells() {
        let cli = Cli::try_parse_from(["basecalc", "matrix", "sub", "-1,2;3,4", "1,1;1,1"]).unwrap();
        match cli.command {
            Command::Matrix(MatrixCommand::Sub(pair)) => {
                assert_eq!(pair.a.get(0, 0).unwrap(), -1.0);
            }
            _ => panic!("expected matrix sub"),
        }
    }

    #[test]
    fn test_bad_radix_rejected() {
        assert!(Cli::try_parse_from(["basecalc", "convert", "1", "--from", "ternary"]).is_err());
    }
}
