//! Reader for paired read position/length files.
//!
//! Each mate is one line `<position> <length>`; two consecutive lines form a
//! pair. Blank lines are ignored and tokens after the second are ignored.
//!
//! ```text
//! 1200 100     <- mate 1
//! 1450 100     <- mate 2   insert = 1450 - 1200 + 100 = 350
//! ```
//!
//! Inputs ending in `.gz` or `.bgz` are decompressed transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::insert_size::HistogramError;

/// One mate of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mate {
    pub position: i64,
    pub length: i64,
}

/// Two consecutive mates and the line number of the second one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPairRecord {
    pub first: Mate,
    pub second: Mate,
    pub line_number: usize,
}

impl ReadPairRecord {
    /// `pos2 - pos1 + len2`, or `None` on overflow
    #[must_use]
    pub fn insert_size(&self) -> Option<i64> {
        self.second
            .position
            .checked_sub(self.first.position)?
            .checked_add(self.second.length)
    }
}

/// Parse a single `<position> <length>` line.
///
/// # Errors
///
/// Returns `HistogramError::MalformedRecordLine` if either token is missing or
/// is not a signed integer.
pub fn parse_mate(line: &str, line_number: usize) -> Result<Mate, HistogramError> {
    let malformed = |reason: String| HistogramError::MalformedRecordLine {
        line_number,
        line: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let mut next_int = |what: &str| -> Result<i64, HistogramError> {
        let token = tokens
            .next()
            .ok_or_else(|| malformed(format!("missing {what}")))?;
        token
            .parse::<i64>()
            .map_err(|e| malformed(format!("invalid {what} '{token}': {e}")))
    };

    let position = next_int("position")?;
    let length = next_int("length")?;
    Ok(Mate { position, length })
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Iterator over `ReadPairRecord`s of a buffered reader
pub struct PairReader<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl PairReader<Box<dyn BufRead>> {
    /// Open a pair file, plain or gzip-compressed
    ///
    /// # Errors
    ///
    /// Returns `HistogramError::Io` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, HistogramError> {
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if is_gzipped(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Next non-blank line with its 1-based line number
    fn next_line(&mut self) -> Option<Result<(usize, String), HistogramError>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok((self.line_number, line))),
                Err(e) => return Some(Err(e.into())),
            }
        }
        None
    }

    fn read_record(&mut self) -> Option<Result<ReadPairRecord, HistogramError>> {
        let (first_no, first_line) = match self.next_line()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        let first = match parse_mate(&first_line, first_no) {
            Ok(mate) => mate,
            Err(e) => return Some(Err(e)),
        };

        let Some(next) = self.next_line() else {
            debug!(line = first_no, "Discarding unpaired trailing line");
            return None;
        };
        let (line_number, second_line) = match next {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };

        Some(parse_mate(&second_line, line_number).map(|second| ReadPairRecord {
            first,
            second,
            line_number,
        }))
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = Result<ReadPairRecord, HistogramError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record()
    }
}
