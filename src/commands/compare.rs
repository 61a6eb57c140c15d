//! Implementation of `gcode-compare`.

use super::resolve_config;
use crate::cli::{CompareArgs, ReportFormat};
use crate::compare::{ComparisonReport, ComparisonSummary, compare_lines};
use crate::error::{GcodeError, Result};
use crate::lines::LineSequence;
use crate::output::OutputSink;
use std::io::Write;
use tracing::info;

/// Execute `gcode-compare`.
///
/// Both inputs are read before the report destination is opened, so a bad
/// input path never truncates an existing report file. If writing fails the
/// sink is dropped (closing any file) before the error propagates.
pub fn cmd_compare(args: CompareArgs) -> Result<ComparisonSummary> {
    let config = resolve_config(args.settings, None)?;

    let reference = LineSequence::load(&args.reference, args.after_config, &config.marker)?;
    let generated = LineSequence::load(&args.generated, args.after_config, &config.marker)?;

    info!(
        reference = %args.reference.display(),
        generated = %args.generated.display(),
        reference_offset = reference.offset,
        generated_offset = generated.offset,
        "comparing"
    );

    let mut sink = OutputSink::open(&args.out)?;
    let target = sink.target();

    let summary = match args.format {
        ReportFormat::Text => {
            compare_lines(&reference, &generated, &mut sink)
                .map_err(|e| GcodeError::write(&target, e))?
        }
        ReportFormat::Json => {
            let reference_name = args.reference.to_string_lossy();
            let generated_name = args.generated.to_string_lossy();
            let report = ComparisonReport::build(
                &reference_name,
                &generated_name,
                args.after_config,
                &reference,
                &generated,
            );
            write_json(&report, &mut sink, &target)?;
            report.summary
        }
    };

    sink.finish()?;
    Ok(summary)
}

fn write_json(report: &ComparisonReport<'_>, sink: &mut OutputSink, target: &str) -> Result<()> {
    serde_json::to_writer_pretty(&mut *sink, report).map_err(|e| {
        if e.is_io() {
            GcodeError::write(target, e.into())
        } else {
            GcodeError::Report(e)
        }
    })?;
    writeln!(sink).map_err(|e| GcodeError::write(target, e))
}
