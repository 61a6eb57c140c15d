//! Command implementations for the gcode-check binaries.
//!
//! Each handler resolves settings, does the file work, and returns a result
//! the binary turns into an exit code.

mod compare;
mod extract;

pub use compare::cmd_compare;
pub use extract::{cmd_extract, extract_to};

use crate::cli::SettingsArgs;
use crate::config::Config;
use crate::error::Result;

/// Resolve settings from `--config` plus command-line overrides.
fn resolve_config(settings: SettingsArgs, extract_limit: Option<usize>) -> Result<Config> {
    Config::load_or_default(settings.config.as_deref())?
        .with_overrides(settings.marker, extract_limit)
}
