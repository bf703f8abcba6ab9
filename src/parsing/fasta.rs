//! Line-level FASTA header rewriting.
//!
//! Records are not parsed into sequences: each line is trimmed, blank lines
//! are dropped and header lines (`>`) get a suffix appended. Sequence lines
//! pass through with their original wrapping.

use std::io::{BufRead, Write};

/// Counts from rewriting one FASTA stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Header lines seen (one per record)
    pub records: usize,
    /// Lines written, headers included
    pub lines: usize,
}

impl std::ops::AddAssign for RewriteStats {
    fn add_assign(&mut self, other: Self) {
        self.records += other.records;
        self.lines += other.lines;
    }
}

/// Check if a trimmed line is a FASTA header
#[must_use]
pub fn is_header(line: &str) -> bool {
    line.starts_with('>')
}

/// Copy `reader` to `writer`, appending `suffix` to every header line.
///
/// # Errors
///
/// Returns any I/O error from reading or writing.
pub fn rewrite_headers<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    suffix: &str,
) -> std::io::Result<RewriteStats> {
    let mut stats = RewriteStats::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_header(line) {
            stats.records += 1;
            writeln!(writer, "{line}{suffix}")?;
        } else {
            writeln!(writer, "{line}")?;
        }
        stats.lines += 1;
    }

    Ok(stats)
}
