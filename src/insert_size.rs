//! Insert-size histogram over paired read positions.
//!
//! Reads pairs with [`PairReader`], accumulates `pos2 - pos1 + len2` into a
//! dense [`Histogram`] of `max_len` buckets and writes it as
//! `"<bucket> <count>"` lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::histogram::Histogram;
use crate::parsing::pairs::{PairReader, ReadPairRecord};

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line_number} ('{line}'): {reason}")]
    MalformedRecordLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error(
        "Insert size {insert_size} on line {line_number} is outside the histogram range [0, {max_len})"
    )]
    InsertSizeOutOfRange {
        insert_size: i64,
        max_len: usize,
        line_number: usize,
    },

    #[error("Insert size on line {line_number} overflows a 64-bit integer")]
    InsertSizeOverflow { line_number: usize },

    #[error("Cannot allocate a histogram of {max_len} buckets")]
    HistogramTooLarge { max_len: usize },
}

/// Build the histogram for every pair yielded by `pairs`.
///
/// # Errors
///
/// Returns `HistogramError::HistogramTooLarge` if `max_len` buckets cannot be
/// allocated, propagates the first read/parse error, and fails with
/// `HistogramError::InsertSizeOutOfRange` on the first insert size outside
/// `[0, max_len)` or `HistogramError::InsertSizeOverflow` when it does not
/// fit in an `i64`.
pub fn accumulate<I>(pairs: I, max_len: usize) -> Result<Histogram, HistogramError>
where
    I: IntoIterator<Item = Result<ReadPairRecord, HistogramError>>,
{
    let mut histogram = Histogram::new(max_len)?;

    for pair in pairs {
        let pair = pair?;
        let insert_size = pair
            .insert_size()
            .ok_or(HistogramError::InsertSizeOverflow {
                line_number: pair.line_number,
            })?;
        histogram.record(insert_size, pair.line_number)?;
    }

    Ok(histogram)
}

/// Compute the insert-size histogram of `input` and write it to `output`.
///
/// Returns the total number of mate pairs counted. `output` is only created
/// once the whole input has been read successfully.
///
/// # Errors
///
/// Returns `HistogramError::Io` for unreadable input or unwritable output,
/// `HistogramError::MalformedRecordLine` for non-integer lines,
/// `HistogramError::InsertSizeOutOfRange` or `HistogramError::InsertSizeOverflow`
/// for unusable insert sizes, and `HistogramError::HistogramTooLarge` when
/// `max_len` buckets cannot be allocated.
pub fn compute_histogram(
    input: &Path,
    output: &Path,
    max_len: usize,
) -> Result<u64, HistogramError> {
    let histogram = accumulate(PairReader::from_path(input)?, max_len)?;

    let mut writer = BufWriter::new(File::create(output)?);
    let total = histogram.write_to(&mut writer)?;
    writer.flush()?;

    debug!(
        total,
        max_len,
        "Wrote insert-size histogram to {}",
        output.display()
    );

    Ok(total)
}
