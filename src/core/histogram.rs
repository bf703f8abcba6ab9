//! Dense insert-size histogram.
//!
//! Buckets cover `0..max_len` and are allocated up front, so the written
//! histogram always has exactly `max_len` rows, zero-count buckets included.

use std::io::Write;

use crate::insert_size::HistogramError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Create a histogram with `max_len` zeroed buckets
    ///
    /// # Errors
    ///
    /// Returns `HistogramError::HistogramTooLarge` if the buckets cannot be
    /// allocated.
    pub fn new(max_len: usize) -> Result<Self, HistogramError> {
        let mut counts = Vec::new();
        counts
            .try_reserve_exact(max_len)
            .map_err(|_| HistogramError::HistogramTooLarge { max_len })?;
        counts.resize(max_len, 0);
        Ok(Self { counts })
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.counts.len()
    }

    /// Count of a single bucket, `None` outside `0..max_len`
    #[cfg(test)]
    fn count(&self, bucket: usize) -> Option<u64> {
        self.counts.get(bucket).copied()
    }

    /// Sum of all bucket counts
    #[cfg(test)]
    fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Add one observation of `insert_size`.
    ///
    /// # Errors
    ///
    /// Returns `HistogramError::InsertSizeOutOfRange` if `insert_size` is
    /// negative or not below `max_len`. Values are never clamped.
    pub fn record(&mut self, insert_size: i64, line_number: usize) -> Result<(), HistogramError> {
        let max_len = self.max_len();
        let slot = usize::try_from(insert_size)
            .ok()
            .and_then(|idx| self.counts.get_mut(idx))
            .ok_or(HistogramError::InsertSizeOutOfRange {
                insert_size,
                max_len,
                line_number,
            })?;
        *slot += 1;
        Ok(())
    }

    /// Write one `"<bucket> <count>"` line per bucket in ascending order.
    ///
    /// Returns the running total of all counts written.
    ///
    /// # Errors
    ///
    /// Returns `HistogramError::Io` if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64, HistogramError> {
        let mut total = 0u64;
        for (bucket, count) in self.counts.iter().enumerate() {
            total += count;
            writeln!(writer, "{bucket} {count}")?;
        }
        Ok(total)
    }
}
