//! Config-block extractor.
//!
//! Prints up to 200 lines following `; CONFIG_BLOCK_END`, numbered from 0001.

use clap::Parser;
use gcode_check::cli::ExtractArgs;
use gcode_check::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ExtractArgs::parse();
    logging::init_subscriber(logging::DEFAULT_LEVEL);

    match commands::cmd_extract(args) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
