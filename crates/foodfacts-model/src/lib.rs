//! Data model shared by the food dataset extraction crates.
//!
//! - [`RawRecord`] / [`RawValue`]: rows as decoded by a dataset reader
//! - [`Node`]: a field after normalization
//! - [`Product`]: the record emitted for every row that passes the filter

pub mod node;
pub mod product;
pub mod raw;

pub use node::Node;
pub use product::Product;
pub use raw::{RawRecord, RawValue, format_numeric};
