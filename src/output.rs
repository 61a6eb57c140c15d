//! Report destinations.
//!
//! `-` selects standard output; anything else is a file that is created or
//! truncated. The file handle is owned by the sink, so it is released on every
//! exit path, including when a write fails halfway through a report.

use crate::error::{GcodeError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;

/// Target name that selects standard output.
pub const STDOUT_TARGET: &str = "-";

/// Where a report is written.
#[derive(Debug)]
pub enum OutputSink {
    Stdout(Stdout),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl OutputSink {
    /// Open `target`: `-` for stdout, otherwise a file path.
    pub fn open(target: &str) -> Result<Self> {
        if target == STDOUT_TARGET {
            return Ok(OutputSink::Stdout(io::stdout()));
        }

        let path = PathBuf::from(target);
        let file = File::create(&path).map_err(|e| GcodeError::write(target, e))?;
        Ok(OutputSink::File {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Human-readable name used in error messages.
    pub fn target(&self) -> String {
        match self {
            OutputSink::Stdout(_) => "<stdout>".to_string(),
            OutputSink::File { path, .. } => path.display().to_string(),
        }
    }

    /// Flush buffered output and release the sink.
    ///
    /// Dropping a sink without calling this also closes the file, but a
    /// flush error would then go unreported.
    pub fn finish(mut self) -> Result<()> {
        let target = self.target();
        self.flush().map_err(|e| GcodeError::write(target, e))
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(out) => out.write(buf),
            OutputSink::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(out) => out.flush(),
            OutputSink::File { writer, .. } => writer.flush(),
        }
    }
}
