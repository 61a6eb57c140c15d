//! Strict positional comparison of two line sequences.
//!
//! Lines are paired by position, never aligned. Equality is byte-for-byte on
//! the raw line including its `\n` terminator; the terminator is stripped
//! only when a line is printed.
//!
//! Report format for every differing position:
//!
//! ```text
//! REF[12]: G1 X10 Y10
//! OUT[12]: G1 X10 Y11
//!
//! ```
//!
//! A side with no line at that position prints `-` instead of a number.

use crate::lines::LineSequence;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Totals for one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// Positions compared: the length of the longer sequence.
    pub total: usize,

    /// Positions whose lines differ.
    pub differences: usize,
}

impl ComparisonSummary {
    pub fn is_identical(&self) -> bool {
        self.differences == 0
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compared {} lines; differences: {}",
            self.total, self.differences
        )
    }
}

/// One differing position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord<'a> {
    /// 1-based position within the compared views.
    pub position: usize,

    /// Absolute line number in the reference file, if it has a line here.
    pub reference_line: Option<usize>,

    /// Absolute line number in the generated file, if it has a line here.
    pub generated_line: Option<usize>,

    /// Raw reference line.
    #[serde(rename = "reference_text", serialize_with = "serialize_display")]
    pub reference: Option<&'a str>,

    /// Raw generated line.
    #[serde(rename = "generated_text", serialize_with = "serialize_display")]
    pub generated: Option<&'a str>,
}

impl ComparisonRecord<'_> {
    /// Write the three-line text block for this record.
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "REF[{}]: {}",
            LineLabel(self.reference_line),
            display_text(self.reference)
        )?;
        writeln!(
            out,
            "OUT[{}]: {}",
            LineLabel(self.generated_line),
            display_text(self.generated)
        )?;
        writeln!(out)
    }
}

/// Renders an optional line number, or `-` when the side has no line.
struct LineLabel(Option<usize>);

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("-"),
        }
    }
}

fn display_text(line: Option<&str>) -> &str {
    line.map(|l| l.trim_end_matches('\n')).unwrap_or("")
}

fn serialize_display<S: serde::Serializer>(
    line: &Option<&str>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match line {
        Some(l) => serializer.serialize_some(l.trim_end_matches('\n')),
        None => serializer.serialize_none(),
    }
}

/// Every position where `reference` and `generated` differ, in order.
///
/// The shorter sequence is padded with absent lines, so every position past
/// its end is a difference.
pub fn diff_records<'a>(
    reference: &'a LineSequence,
    generated: &'a LineSequence,
) -> impl Iterator<Item = ComparisonRecord<'a>> + 'a {
    let total = reference.len().max(generated.len());

    (1..=total).filter_map(move |position| {
        let a = reference.get(position - 1);
        let b = generated.get(position - 1);

        if a.unwrap_or("") == b.unwrap_or("") {
            return None;
        }

        Some(ComparisonRecord {
            position,
            reference_line: a.map(|_| reference.line_number(position)),
            generated_line: b.map(|_| generated.line_number(position)),
            reference: a,
            generated: b,
        })
    })
}

/// Compare two sequences and write a text block for every difference.
///
/// # Returns
///
/// * `Ok(ComparisonSummary)` - Positions compared and positions that differ
/// * `Err(io::Error)` - Writing to `out` failed; the comparison is abandoned
pub fn compare_lines<W: Write + ?Sized>(
    reference: &LineSequence,
    generated: &LineSequence,
    out: &mut W,
) -> io::Result<ComparisonSummary> {
    let mut summary = ComparisonSummary {
        total: reference.len().max(generated.len()),
        differences: 0,
    };

    for record in diff_records(reference, generated) {
        summary.differences += 1;
        record.write_text(out)?;
    }

    Ok(summary)
}

/// Machine-readable form of a full comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub reference: &'a str,
    pub generated: &'a str,
    pub after_config: bool,
    #[serde(flatten)]
    pub summary: ComparisonSummary,
    pub records: Vec<ComparisonRecord<'a>>,
}

impl<'a> ComparisonReport<'a> {
    /// Compare the sequences and collect every difference.
    ///
    /// `reference_name` and `generated_name` label the inputs in the report.
    pub fn build(
        reference_name: &'a str,
        generated_name: &'a str,
        after_config: bool,
        reference: &'a LineSequence,
        generated: &'a LineSequence,
    ) -> Self {
        let records: Vec<_> = diff_records(reference, generated).collect();
        let summary = ComparisonSummary {
            total: reference.len().max(generated.len()),
            differences: records.len(),
        };

        Self {
            reference: reference_name,
            generated: generated_name,
            after_config,
            summary,
            records,
        }
    }
}
