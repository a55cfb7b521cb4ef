//! The windowed row-source contract and an in-memory implementation.

use foodfacts_model::RawRecord;

use crate::error::Result;

/// A dataset that hands out its rows in bounded windows, in dataset order.
///
/// Every row is returned exactly once across successive windows. A window
/// never holds more than `max_rows` rows and is empty exactly when the
/// dataset is exhausted.
pub trait RowSource {
    /// Total row count, fixed when the source was opened.
    fn total_rows(&self) -> u64;

    /// Rows handed out so far.
    fn rows_read(&self) -> u64;

    /// Pull the next window of at most `max_rows` rows.
    ///
    /// `max_rows == 0` returns an empty window without moving the cursor.
    fn next_window(&mut self, max_rows: usize) -> Result<Vec<RawRecord>>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn total_rows(&self) -> u64 {
        (**self).total_rows()
    }

    fn rows_read(&self) -> u64 {
        (**self).rows_read()
    }

    fn next_window(&mut self, max_rows: usize) -> Result<Vec<RawRecord>> {
        (**self).next_window(max_rows)
    }
}

/// Rows already held in memory, served through the [`RowSource`] contract.
#[derive(Debug)]
pub struct MemoryDataset {
    total_rows: u64,
    rows_read: u64,
    rows: std::vec::IntoIter<RawRecord>,
}

impl MemoryDataset {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self {
            total_rows: rows.len() as u64,
            rows_read: 0,
            rows: rows.into_iter(),
        }
    }
}

impl FromIterator<RawRecord> for MemoryDataset {
    fn from_iter<T: IntoIterator<Item = RawRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RowSource for MemoryDataset {
    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn rows_read(&self) -> u64 {
        self.rows_read
    }

    fn next_window(&mut self, max_rows: usize) -> Result<Vec<RawRecord>> {
        let window: Vec<RawRecord> = self.rows.by_ref().take(max_rows).collect();
        self.rows_read += window.len() as u64;
        Ok(window)
    }
}
