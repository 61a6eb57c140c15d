//! CLI argument parsing for the gcode-check binaries.
//!
//! Uses clap derive macros for declarative argument definitions. Each binary
//! parses its own struct; the implementations live in `commands`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Strict G-code line-by-line comparator (prints every differing line).
///
/// Lines are paired by position. Any byte difference counts, including
/// whitespace and a missing final newline. Exits 0 when the files match and
/// 1 when at least one line differs.
#[derive(Parser, Debug)]
#[command(name = "gcode-compare")]
#[command(author, version, about, long_about = None)]
pub struct CompareArgs {
    /// Path to reference G-code file.
    pub reference: PathBuf,

    /// Path to generated G-code file.
    pub generated: PathBuf,

    /// Compare only lines after the config block marker.
    #[arg(long)]
    pub after_config: bool,

    /// Output path for differences ("-" for stdout).
    #[arg(long, default_value = "-")]
    pub out: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Print the lines that follow the config block marker.
///
/// Each line is prefixed with a 4-digit sequence number starting at 0001.
/// If the marker is missing, lines are taken from the start of the file.
#[derive(Parser, Debug)]
#[command(name = "gcode-extract")]
#[command(author, version, about, long_about = None)]
pub struct ExtractArgs {
    /// G-code file to read.
    pub file: PathBuf,

    /// Maximum number of lines to print [default: 200].
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options shared by both binaries.
#[derive(clap::Args, Debug, Default)]
pub struct SettingsArgs {
    /// YAML file with tool settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Marker line that ends the config block [default: "; CONFIG_BLOCK_END"].
    #[arg(long)]
    pub marker: Option<String>,
}

/// Output format for `gcode-compare`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// REF/OUT blocks, one per differing line.
    #[default]
    Text,
    /// A single JSON document with every differing line.
    Json,
}
