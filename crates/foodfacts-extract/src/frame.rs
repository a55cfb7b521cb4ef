//! Columnar view of extracted products.

use foodfacts_model::Product;
use polars::prelude::{Column, DataFrame, PolarsResult};

/// Column names of the product frame, in order.
pub const PRODUCT_COLUMNS: [&str; 3] = ["name", "code", "ingredient_id"];

/// Build a frame with one row per product, in extraction order.
///
/// # Errors
///
/// Returns a Polars error if the columns cannot be assembled.
pub fn products_to_dataframe(products: &[Product]) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = products.iter().map(Product::name).collect();
    let codes: Vec<&str> = products.iter().map(Product::code).collect();
    let ids: Vec<i64> = products.iter().map(Product::ingredient_id).collect();
    DataFrame::new(vec![
        Column::new(PRODUCT_COLUMNS[0].into(), names),
        Column::new(PRODUCT_COLUMNS[1].into(), codes),
        Column::new(PRODUCT_COLUMNS[2].into(), ids),
    ])
}
