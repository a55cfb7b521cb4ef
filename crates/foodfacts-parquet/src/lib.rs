//! Windowed reading of large nested Parquet datasets.
//!
//! The [`RowSource`] trait is the contract the extraction pass pulls rows
//! through: a fixed total row count and successive bounded windows of
//! [`RawRecord`]s. [`ParquetDataset`] implements it over a Parquet file,
//! [`MemoryDataset`] over rows already in memory.
//!
//! # Example
//!
//! ```no_run
//! use foodfacts_parquet::{ParquetDataset, RowSource};
//!
//! let mut dataset = ParquetDataset::open("food.parquet").unwrap();
//! println!("{} rows", dataset.total_rows());
//! loop {
//!     let window = dataset.next_window(10_000).unwrap();
//!     if window.is_empty() {
//!         break;
//!     }
//!     // process window
//! }
//! dataset.close();
//! ```
//!
//! [`RawRecord`]: foodfacts_model::RawRecord

mod convert;
mod error;
mod reader;
mod schema;
mod source;

pub use error::{DatasetError, Result};
pub use reader::ParquetDataset;
pub use schema::{ColumnInfo, DatasetInfo, inspect};
pub use source::{MemoryDataset, RowSource};
