use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vercmp_version::ComparisonOperator;

pub mod commands;

use commands::OutputFormat;

/// Exit status for invalid versions and other command errors. `test` uses 1
/// for "relation does not hold", so errors must not.
const ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(version, about = "Compare dotted and dashed version strings", long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "text",
        env = "VERCMP_FORMAT"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print -1, 0 or 1 as LEFT sorts below, equal to or above RIGHT")]
    Compare {
        /// Version on the left-hand side
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Version on the right-hand side
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    #[command(about = "Exit successfully when `LEFT OP RIGHT` holds, with 1 otherwise")]
    Test {
        /// Version on the left-hand side
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// One of eq, gt, ge, lt, le (or ==, >, >=, <, <=)
        operator: ComparisonOperator,
        /// Version on the right-hand side
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    #[command(about = "Print the higher of two versions")]
    Max {
        /// Version on the left-hand side; wins ties
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Version on the right-hand side
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> miette::Result<ExitCode> {
    tracing::debug!(format = ?cli.format, "running command");

    match cli.command {
        Commands::Compare { left, right } => {
            commands::compare::compare(&left, &right, cli.format)?;
        }
        Commands::Test {
            left,
            operator,
            right,
        } => {
            if !commands::test::test(&left, operator, &right, cli.format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Max { left, right } => {
            commands::max::max(&left, &right, cli.format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(report) => {
            anstream::eprintln!("{report:?}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
