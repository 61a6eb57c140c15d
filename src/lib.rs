//! gcode-check: strict comparison and config-block extraction for slicer G-code.
//!
//! The crate backs two binaries:
//! - `gcode-compare` diffs a reference and a generated file position by position
//! - `gcode-extract` prints the lines that follow the `; CONFIG_BLOCK_END` marker
//!
//! G-code is treated as opaque text. A file is an ordered sequence of lines and
//! nothing more.

pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod lines;
pub mod logging;
pub mod output;

/// The literal line that separates the slicer's configuration header from the
/// executable body of a G-code file.
pub const CONFIG_BLOCK_END: &str = "; CONFIG_BLOCK_END";
