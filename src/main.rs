//! Admit - admission year configuration client
//!
//! Drives the admission year configuration workflow of the admissions
//! portal from a terminal: browse catalogs, scope criteria, majors, objects
//! and regions for a year, and create new admission years.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use admit_core::error::{AdmitError, ExitCode as AdmitExitCode};
use admit_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing can fail before `Cli.format` exists. A JSON request in
            // the raw arguments still gets the error envelope on stderr.
            if argv_format_json {
                let admit_error = match err.kind() {
                    // Help and version print to stdout and exit 0 as usual
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        AdmitError::UsageError(err.to_string())
                    }
                    _ => AdmitError::Other(err.to_string()),
                };

                eprintln!("{}", admit_error.to_json());
                return ExitCode::from(admit_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // Logging goes to stderr so stdout stays parseable under --format json
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(AdmitExitCode::Success as u8),
        Err(e) => {
            // 2 for usage and validation, 3 when the admissions API failed
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Whether the raw arguments ask for JSON output, in either
/// `--format json` or `--format=json` form
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(inline) => inline.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
