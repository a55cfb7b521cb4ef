//! Writing extracted products to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use foodfacts_extract::products_to_dataframe;
use foodfacts_model::Product;
use polars::prelude::{CsvWriter, SerWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Write every product to `path`, replacing any existing file.
pub fn write_products(products: &[Product], path: &Path, format: ExportFormat) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => {
            let mut frame = products_to_dataframe(products).context("build product frame")?;
            CsvWriter::new(&mut writer)
                .include_header(true)
                .finish(&mut frame)
                .with_context(|| format!("write csv {}", path.display()))?;
        }
        ExportFormat::Json => {
            let json = products_to_json(products)?;
            writeln!(writer, "{json}").with_context(|| format!("write json {}", path.display()))?;
        }
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

/// Pretty-printed JSON array of products.
pub fn products_to_json(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).context("serialize products")
}
