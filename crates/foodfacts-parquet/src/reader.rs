//! Parquet-backed row source.
//!
//! Rows are decoded through the `parquet` record API one row group at a
//! time, so peak memory stays at roughly one window of decoded rows plus the
//! current row group's pages, however large the file is.

use std::fs::File;
use std::path::{Path, PathBuf};

use foodfacts_model::RawRecord;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::reader::RowIter;
use tracing::debug;

use crate::convert::convert_row;
use crate::error::{DatasetError, Result};
use crate::source::RowSource;

/// An open Parquet dataset with a forward-only read cursor.
///
/// The underlying file handle is released when the dataset is dropped or
/// [`closed`](Self::close), whether or not every row was read.
pub struct ParquetDataset {
    path: PathBuf,
    total_rows: u64,
    row_groups: usize,
    rows_read: u64,
    poisoned: bool,
    rows: RowIter<'static>,
}

impl ParquetDataset {
    /// Open a Parquet file and read its footer.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::FileNotFound`] when the path does not exist and
    /// [`DatasetError::Parquet`] when the footer or schema cannot be decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_file_reader(path)?;
        let total_rows = u64::try_from(reader.metadata().file_metadata().num_rows()).unwrap_or(0);
        let row_groups = reader.num_row_groups();
        debug!(
            path = %path.display(),
            total_rows,
            row_groups,
            "opened parquet dataset"
        );
        let boxed: Box<dyn FileReader> = Box::new(reader);
        Ok(Self {
            path: path.to_path_buf(),
            total_rows,
            row_groups,
            rows_read: 0,
            poisoned: false,
            rows: RowIter::from_file_into(boxed),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn row_groups(&self) -> usize {
        self.row_groups
    }

    /// Release the file handle.
    pub fn close(self) {
        debug!(
            path = %self.path.display(),
            rows_read = self.rows_read,
            total_rows = self.total_rows,
            "closing parquet dataset"
        );
    }
}

impl std::fmt::Debug for ParquetDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParquetDataset")
            .field("path", &self.path)
            .field("total_rows", &self.total_rows)
            .field("row_groups", &self.row_groups)
            .field("rows_read", &self.rows_read)
            .field("poisoned", &self.poisoned)
            .finish_non_exhaustive()
    }
}

impl RowSource for ParquetDataset {
    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn rows_read(&self) -> u64 {
        self.rows_read
    }

    fn next_window(&mut self, max_rows: usize) -> Result<Vec<RawRecord>> {
        if self.poisoned {
            return Err(DatasetError::Poisoned);
        }
        let remaining = usize::try_from(self.total_rows.saturating_sub(self.rows_read))
            .unwrap_or(usize::MAX);
        let mut window = Vec::with_capacity(max_rows.min(remaining));
        while window.len() < max_rows {
            match self.rows.next() {
                Some(Ok(row)) => {
                    window.push(convert_row(&row));
                    self.rows_read += 1;
                }
                Some(Err(source)) => {
                    self.poisoned = true;
                    return Err(DatasetError::Read {
                        row: self.rows_read,
                        source,
                    });
                }
                None => break,
            }
        }
        Ok(window)
    }
}

pub(crate) fn open_file_reader(path: &Path) -> Result<SerializedFileReader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DatasetError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Open {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    SerializedFileReader::new(file).map_err(|source| DatasetError::Parquet {
        path: path.to_path_buf(),
        source,
    })
}
