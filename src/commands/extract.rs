//! Implementation of `gcode-extract`.

use super::resolve_config;
use crate::cli::ExtractArgs;
use crate::error::{GcodeError, Result};
use crate::extract::{extract_window, write_window};
use crate::lines::LineSequence;
use std::io::Write;
use tracing::debug;

/// Execute `gcode-extract`, printing the window to stdout.
pub fn cmd_extract(args: ExtractArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    extract_to(args, &mut out)
}

/// Execute `gcode-extract` against an arbitrary writer.
pub fn extract_to<W: Write>(args: ExtractArgs, out: &mut W) -> Result<()> {
    let config = resolve_config(args.settings, args.limit)?;
    let sequence = LineSequence::load(&args.file, false, &config.marker)?;

    let window = extract_window(&sequence.lines, &config.marker, config.extract_limit);
    debug!(
        file = %args.file.display(),
        printed = window.len(),
        "extracted config block window"
    );

    write_window(&window, out)
        .and_then(|()| out.flush())
        .map_err(|e| GcodeError::write("<stdout>", e))
}
