//! Config-block window extraction.
//!
//! Prints the lines that follow the marker, each prefixed with a 4-digit
//! sequence number starting at `0001`.
//!
//! When the file has no marker the window starts at the first line of the
//! file instead of being empty. That fallback is preserved, but it is most
//! likely an off-by-one artifact rather than an intended feature; a warning is
//! logged whenever it kicks in.

use crate::lines::find_marker;
use std::io::{self, Write};
use tracing::warn;

/// Default number of lines printed after the marker.
pub const DEFAULT_LIMIT: usize = 200;

/// One line of the extracted window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLine<'a> {
    /// 1-based position within the window.
    pub sequence: usize,

    /// Line content with trailing whitespace removed.
    pub text: &'a str,
}

/// First line index of the window for a marker found at `marker_index`.
///
/// A missing marker counts as index -1, so the window starts at index 0.
pub fn window_start(marker_index: Option<usize>) -> usize {
    marker_index.map_or(0, |index| index + 1)
}

/// Up to `limit` lines following the first marker line.
pub fn extract_window<'a, S: AsRef<str>>(
    lines: &'a [S],
    marker: &str,
    limit: usize,
) -> Vec<ExtractedLine<'a>> {
    let marker_index = find_marker(lines, marker);
    if marker_index.is_none() {
        warn!(
            marker,
            "marker not found; window starts at the first line of the file"
        );
    }

    lines
        .iter()
        .skip(window_start(marker_index))
        .take(limit)
        .enumerate()
        .map(|(i, line)| ExtractedLine {
            sequence: i + 1,
            text: line.as_ref().trim_end(),
        })
        .collect()
}

/// Write each line as `NNNN: text`.
pub fn write_window<W: Write + ?Sized>(
    window: &[ExtractedLine<'_>],
    out: &mut W,
) -> io::Result<()> {
    for line in window {
        writeln!(out, "{:04}: {}", line.sequence, line.text)?;
    }
    Ok(())
}
