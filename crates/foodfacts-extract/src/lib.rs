//! Extraction of products from a windowed row source.
//!
//! One pass reads the dataset window by window, normalizes the configured
//! fields of every row, keeps the rows whose tag field contains the target
//! tag and returns them as [`Product`]s in dataset order.
//!
//! ```
//! use foodfacts_extract::{ExtractOptions, run};
//! use foodfacts_model::{RawRecord, RawValue};
//! use foodfacts_parquet::MemoryDataset;
//!
//! let rows = vec![
//!     RawRecord::new()
//!         .with_field("code", "7610200000001")
//!         .with_field("product_name", "Milk")
//!         .with_field("countries_tags", RawValue::text_list(["en:switzerland"])),
//!     RawRecord::new()
//!         .with_field("code", "4000000000002")
//!         .with_field("countries_tags", RawValue::text_list(["en:germany"])),
//! ];
//! let mut source = MemoryDataset::new(rows);
//! let products = run(&mut source, &ExtractOptions::default().with_window_size(1)).unwrap();
//! assert_eq!(products.len(), 1);
//! assert_eq!(products[0].name(), "Milk");
//! ```
//!
//! [`Product`]: foodfacts_model::Product

mod error;
#[cfg(feature = "polars")]
mod frame;
mod options;
mod pass;

pub use error::{ExtractError, Result};
#[cfg(feature = "polars")]
pub use frame::{PRODUCT_COLUMNS, products_to_dataframe};
pub use options::{
    DEFAULT_CODE_FIELD, DEFAULT_NAME_FIELD, DEFAULT_TAG_FIELD, DEFAULT_TAG_VALUE,
    DEFAULT_WINDOW_SIZE, ExtractOptions,
};
pub use pass::{
    PassDriver, PassOutcome, PassReport, PassState, extract, extract_file, process_row, run,
};
