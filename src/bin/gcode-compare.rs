//! Strict G-code comparator.
//!
//! Parses arguments, runs the comparison, prints the summary line to stderr,
//! and maps the outcome to an exit code.

use clap::Parser;
use gcode_check::cli::CompareArgs;
use gcode_check::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CompareArgs::parse();
    logging::init_subscriber(logging::DEFAULT_LEVEL);

    match commands::cmd_compare(args) {
        Ok(summary) => {
            eprintln!("{}", summary);

            if summary.is_identical() {
                ExitCode::from(exit_codes::SUCCESS as u8)
            } else {
                ExitCode::from(exit_codes::DIFFERENCES_FOUND as u8)
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
