//! Integration tests reading real nested Parquet files.
//!
//! Fixtures are written with the Arrow writer so the files carry the same
//! nested shapes as the product dataset: a binary code column, a list of
//! `{lang, text}` structs for names, and a list of tag strings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryArray, ListBuilder, StringBuilder, StructBuilder};
use arrow::datatypes::{DataType, Field, Fields};
use arrow::record_batch::RecordBatch;
use foodfacts_model::RawValue;
use foodfacts_parquet::{DatasetError, ParquetDataset, RowSource, inspect};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use proptest::prelude::*;
use tempfile::TempDir;

struct FixtureRow {
    code: &'static [u8],
    names: Option<Vec<(&'static str, Option<&'static str>)>>,
    tags: Vec<&'static str>,
}

fn fixture_rows() -> Vec<FixtureRow> {
    vec![
        FixtureRow {
            code: b"7610200000001",
            names: Some(vec![("main", Some("Lait entier")), ("de", Some("Vollmilch"))]),
            tags: vec!["en:switzerland"],
        },
        FixtureRow {
            code: b"4000000000002",
            names: Some(vec![("main", Some("Brot"))]),
            tags: vec!["en:germany"],
        },
        FixtureRow {
            code: b"3000000000003",
            names: None,
            tags: vec!["en:france", "en:switzerland"],
        },
        FixtureRow {
            code: b"7610200000004",
            names: Some(vec![("main", None), ("fr", Some("Gruyère"))]),
            tags: vec![],
        },
        FixtureRow {
            code: b"7610200000005",
            names: Some(vec![]),
            tags: vec!["en:switzerland"],
        },
    ]
}

fn write_fixture(dir: &Path, rows: &[FixtureRow], row_group_size: usize) -> PathBuf {
    let name_fields = Fields::from(vec![
        Field::new("lang", DataType::Utf8, true),
        Field::new("text", DataType::Utf8, true),
    ]);

    let codes: Vec<&[u8]> = rows.iter().map(|row| row.code).collect();
    let code_array = BinaryArray::from_vec(codes);

    let mut names = ListBuilder::new(StructBuilder::from_fields(name_fields, rows.len()));
    let mut tags = ListBuilder::new(StringBuilder::new());
    for row in rows {
        match &row.names {
            Some(entries) => {
                for (lang, text) in entries {
                    let entry = names.values();
                    entry
                        .field_builder::<StringBuilder>(0)
                        .expect("lang builder")
                        .append_value(lang);
                    entry
                        .field_builder::<StringBuilder>(1)
                        .expect("text builder")
                        .append_option(*text);
                    entry.append(true);
                }
                names.append(true);
            }
            None => names.append(false),
        }
        for tag in &row.tags {
            tags.values().append_value(tag);
        }
        tags.append(true);
    }

    let batch = RecordBatch::try_from_iter(vec![
        ("code", Arc::new(code_array) as ArrayRef),
        ("product_name", Arc::new(names.finish()) as ArrayRef),
        ("countries_tags", Arc::new(tags.finish()) as ArrayRef),
    ])
    .expect("build batch");

    let path = dir.join("food.parquet");
    let file = std::fs::File::create(&path).expect("create fixture");
    let props = WriterProperties::builder()
        .set_max_row_group_size(row_group_size)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).expect("writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
    path
}

fn fixture(row_group_size: usize) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_fixture(dir.path(), &fixture_rows(), row_group_size);
    (dir, path)
}

fn code_of(record: &foodfacts_model::RawRecord) -> String {
    record
        .get("code")
        .and_then(RawValue::scalar_text)
        .unwrap_or_default()
}

#[test]
fn reports_total_rows_at_open() {
    let (_dir, path) = fixture(2);
    let dataset = ParquetDataset::open(&path).expect("open");
    assert_eq!(dataset.total_rows(), 5);
    assert_eq!(dataset.row_groups(), 3);
    assert_eq!(dataset.rows_read(), 0);
    dataset.close();
}

#[test]
fn decodes_nested_shapes() {
    let (_dir, path) = fixture(10);
    let mut dataset = ParquetDataset::open(&path).expect("open");
    let window = dataset.next_window(10).expect("read window");
    assert_eq!(window.len(), 5);

    let first = &window[0];
    assert_eq!(
        first.get("code"),
        Some(&RawValue::Bytes(b"7610200000001".to_vec()))
    );
    let Some(RawValue::List(names)) = first.get("product_name") else {
        panic!("product_name should decode as a list");
    };
    assert_eq!(names.len(), 2);
    let Some(RawValue::Record(entry)) = names.first() else {
        panic!("name entries should decode as records");
    };
    assert_eq!(entry.get("lang"), Some(&RawValue::text("main")));
    assert_eq!(entry.get("text"), Some(&RawValue::text("Lait entier")));
    assert_eq!(
        first.get("countries_tags"),
        Some(&RawValue::text_list(["en:switzerland"]))
    );

    assert_eq!(window[2].get("product_name"), Some(&RawValue::Null));

    assert!(dataset.next_window(10).expect("read past end").is_empty());
}

#[test]
fn windows_cross_row_group_boundaries() {
    let (_dir, path) = fixture(2);
    let mut dataset = ParquetDataset::open(&path).expect("open");
    let mut sizes = Vec::new();
    let mut codes = Vec::new();
    loop {
        let window = dataset.next_window(3).expect("read window");
        if window.is_empty() {
            break;
        }
        sizes.push(window.len());
        codes.extend(window.iter().map(code_of));
    }
    assert_eq!(sizes, [3, 2]);
    assert_eq!(dataset.rows_read(), 5);
    assert_eq!(codes[0], "7610200000001");
    assert_eq!(codes[4], "7610200000005");
}

#[test]
fn inspect_lists_leaf_columns() {
    let (_dir, path) = fixture(2);
    let info = inspect(&path).expect("inspect");
    assert_eq!(info.total_rows, 5);
    assert_eq!(info.row_groups, 3);
    assert!(info.has_field("CODE"));
    assert!(info.has_field("product_name"));
    assert!(!info.has_field("brands"));

    let code = info
        .columns
        .iter()
        .find(|column| column.path == "code")
        .expect("code column");
    assert_eq!(code.physical_type, "BYTE_ARRAY");
    assert!(!code.repeated);
    assert!(
        info.columns
            .iter()
            .any(|column| column.path.starts_with("countries_tags.") && column.repeated)
    );
}

#[test]
fn inspect_missing_file_fails() {
    let err = inspect("nowhere/food.parquet").unwrap_err();
    assert!(matches!(err, DatasetError::FileNotFound { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_row_observed_exactly_once(window in 1usize..=6, row_group_size in 1usize..=5) {
        let (_dir, path) = fixture(row_group_size);
        let mut dataset = ParquetDataset::open(&path).expect("open");
        let total = dataset.total_rows();
        let mut seen = HashSet::new();
        let mut observed = 0u64;
        loop {
            let rows = dataset.next_window(window).expect("read window");
            prop_assert!(rows.len() <= window);
            if rows.is_empty() {
                break;
            }
            observed += rows.len() as u64;
            for row in &rows {
                prop_assert!(seen.insert(code_of(row)));
            }
        }
        prop_assert_eq!(observed, total);
    }
}
