//! Dataset footer inspection.

use std::path::{Path, PathBuf};

use parquet::basic::ConvertedType;
use parquet::file::reader::FileReader;

use crate::error::Result;
use crate::reader::open_file_reader;

/// Summary of a dataset's footer metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    pub path: PathBuf,
    pub total_rows: u64,
    pub row_groups: usize,
    pub columns: Vec<ColumnInfo>,
}

/// One leaf column of the (possibly nested) schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Dotted path from the root, e.g. `product_name.list.element.text`.
    pub path: String,
    pub physical_type: String,
    pub converted_type: Option<String>,
    /// True when the column sits under a repeated (list) level.
    pub repeated: bool,
}

/// Read the footer of a Parquet file without decoding any rows.
pub fn inspect(path: impl AsRef<Path>) -> Result<DatasetInfo> {
    let path = path.as_ref();
    let reader = open_file_reader(path)?;
    let metadata = reader.metadata();
    let file_metadata = metadata.file_metadata();
    let columns = file_metadata
        .schema_descr()
        .columns()
        .iter()
        .map(|column| {
            let converted = column.converted_type();
            ColumnInfo {
                path: column.path().string(),
                physical_type: column.physical_type().to_string(),
                converted_type: (converted != ConvertedType::NONE)
                    .then(|| converted.to_string()),
                repeated: column.max_rep_level() > 0,
            }
        })
        .collect();
    Ok(DatasetInfo {
        path: path.to_path_buf(),
        total_rows: u64::try_from(file_metadata.num_rows()).unwrap_or(0),
        row_groups: metadata.num_row_groups(),
        columns,
    })
}

impl DatasetInfo {
    /// Find a top-level field by name, ignoring ASCII case.
    pub fn has_field(&self, name: &str) -> bool {
        self.columns.iter().any(|column| {
            column
                .path
                .split('.')
                .next()
                .is_some_and(|root| root.eq_ignore_ascii_case(name))
        })
    }
}
