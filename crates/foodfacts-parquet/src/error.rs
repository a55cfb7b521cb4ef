//! Error types for dataset reading.

use std::path::PathBuf;

use parquet::errors::ParquetError;
use thiserror::Error;

/// Errors that can occur when opening or reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable Parquet file (bad footer, bad metadata).
    #[error("invalid parquet file {path}: {source}")]
    Parquet {
        path: PathBuf,
        #[source]
        source: ParquetError,
    },

    /// Decoding failed part-way through the dataset.
    #[error("read failed at row {row}: {source}")]
    Read {
        row: u64,
        #[source]
        source: ParquetError,
    },

    /// A previous read failed; the cursor position is no longer trustworthy.
    #[error("dataset cursor is unusable after an earlier read failure")]
    Poisoned,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
