//! Line loading for G-code files.
//!
//! Files are read whole, decoded leniently, and split into lines that keep
//! their `\n` terminator. The comparator relies on the terminator being part
//! of the line: a last line without one is a different line.
//!
//! When asked to skip the configuration header, everything up to and
//! including the first marker line is dropped and the returned sequence
//! remembers where it started in the original file.

use crate::error::{GcodeError, Result};
use std::path::Path;
use tracing::debug;

/// An ordered run of lines taken from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    /// Lines in file order, each ending in `\n` except possibly the last.
    pub lines: Vec<String>,

    /// 0-based index of `lines[0]` within the original file.
    pub offset: usize,
}

impl LineSequence {
    /// Read `path` and build a sequence from its contents.
    ///
    /// # Arguments
    ///
    /// * `path` - File to read
    /// * `skip_config` - Drop everything up to and including the marker line
    /// * `marker` - Marker literal compared against trimmed lines
    ///
    /// # Returns
    ///
    /// * `Ok(LineSequence)` - The lines and their starting offset
    /// * `Err(GcodeError::Read)` - The file could not be read
    pub fn load<P: AsRef<Path>>(path: P, skip_config: bool, marker: &str) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| GcodeError::read(path, e))?;
        let sequence = Self::from_text(&decode_lossy(&bytes), skip_config, marker);

        debug!(
            path = %path.display(),
            lines = sequence.len(),
            offset = sequence.offset,
            "loaded line sequence"
        );

        Ok(sequence)
    }

    /// Build a sequence from already-decoded text.
    ///
    /// A missing marker is not an error: the whole text is returned with
    /// offset 0.
    pub fn from_text(text: &str, skip_config: bool, marker: &str) -> Self {
        let lines = split_lines(text);

        if !skip_config {
            return Self { lines, offset: 0 };
        }

        match find_marker(&lines, marker) {
            Some(index) => {
                let start = index + 1;
                debug!(marker_line = start, "skipping configuration header");
                Self {
                    lines: lines[start..].to_vec(),
                    offset: start,
                }
            }
            None => {
                debug!("marker not found; keeping the whole file");
                Self { lines, offset: 0 }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at 0-based `index` within this sequence.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Absolute 1-based line number in the original file for the 1-based
    /// `position` within this sequence.
    pub fn line_number(&self, position: usize) -> usize {
        self.offset + position
    }
}

/// Decode bytes as UTF-8, dropping any invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Split text into lines that keep their `\n` terminator.
///
/// `\r\n` and lone `\r` are normalised to `\n` first. Empty text yields no
/// lines; text without a trailing newline yields a final unterminated line.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    };

    normalized
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}

/// Index of the first line whose trimmed content equals `marker`.
pub fn find_marker<S: AsRef<str>>(lines: &[S], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().trim() == marker)
}
