use std::path::PathBuf;

use foodfacts_extract::{ExtractOptions, PassReport};
use foodfacts_model::Product;

/// Everything the `extract` command produced.
#[derive(Debug)]
pub struct ExtractResult {
    pub dataset: PathBuf,
    pub options: ExtractOptions,
    pub products: Vec<Product>,
    pub report: PassReport,
    /// File the products were written to, if any.
    pub output: Option<PathBuf>,
}
