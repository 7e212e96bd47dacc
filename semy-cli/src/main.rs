//! Command-line interface (CLI) for semy.
//!
//! Validates, compares, sorts and decomposes Semantic Versioning 2.0.0
//! strings given as arguments. Every command is also reachable through a
//! flag (`-V`/`--validate`, `-c`/`--compare`, `-s`/`--sort`,
//! `-d`/`--decompose`), and `-v`/`--version` prints the program version.
//! Without arguments the usage is printed.
//!
//! Exit status: `0` if OK, `1` if one or more versions are malformed, `2` if
//! the program arguments are incorrect, `3` if any other error occurred
//! (including versions too complex for the fixed-capacity parser).

use clap::{ArgAction, CommandFactory, Parser as ClapParser, Subcommand};
use semy_cli::{CliError, Format};
use smartstring::alias::String;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(name = "semy", version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Command
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates one or more semantic versions
    #[command(short_flag = 'V', long_flag = "validate")]
    Validate {
        /// Versions to validate
        #[arg(allow_hyphen_values = true)]
        versions: Vec<String>,
    },
    /// Compares two semantic versions and prints -1, 0, or 1
    #[command(short_flag = 'c', long_flag = "compare")]
    Compare {
        #[arg(allow_hyphen_values = true)]
        v1: String,
        #[arg(allow_hyphen_values = true)]
        v2: String,
    },
    /// Prints semantic versions in ascending order, one per line
    #[command(short_flag = 's', long_flag = "sort")]
    Sort {
        /// Versions to sort
        #[arg(allow_hyphen_values = true)]
        versions: Vec<String>,
    },
    /// Decomposes a semantic version into its identifiers
    #[command(short_flag = 'd', long_flag = "decompose")]
    Decompose {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Format,
        #[arg(allow_hyphen_values = true)]
        version: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args.command);

    let mut out = io::stdout().lock();
    let result = match args.command {
        None => Args::command().print_help().map_err(CliError::from),
        Some(Commands::Validate { versions }) => semy_cli::validate(&versions),
        Some(Commands::Compare { v1, v2 }) => semy_cli::compare(&v1, &v2, &mut out),
        Some(Commands::Sort { versions }) => semy_cli::sort(&versions, &mut out),
        Some(Commands::Decompose { format, version }) => {
            semy_cli::decompose(format, &version, &mut out)
        }
    }
    .and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
