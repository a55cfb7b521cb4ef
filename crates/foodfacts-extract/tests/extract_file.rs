//! End-to-end passes over Parquet files on disk.
//!
//! Fixtures carry the nested shapes of the product dataset plus a decimal
//! and a date column, and are split into several row groups so windows cross
//! group boundaries.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BinaryArray, Date32Array, Decimal128Array, ListBuilder, StringBuilder,
    StructBuilder,
};
use arrow::datatypes::{DataType, Field, Fields};
use arrow::record_batch::RecordBatch;
use foodfacts_extract::{ExtractError, ExtractOptions, PassState, extract_file};
use foodfacts_model::{Node, Product};
use foodfacts_normalize::normalize_field;
use foodfacts_parquet::{DatasetError, ParquetDataset, RowSource};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use tempfile::TempDir;

struct FixtureRow {
    code: &'static [u8],
    names: Option<Vec<(&'static str, &'static str)>>,
    tags: Vec<&'static str>,
    price_cents: Option<i128>,
    day: Option<i32>,
}

fn fixture_rows() -> Vec<FixtureRow> {
    vec![
        FixtureRow {
            code: b"1",
            names: Some(vec![("main", "Milk")]),
            tags: vec!["en:switzerland"],
            price_cents: Some(1234),
            day: Some(19_000),
        },
        FixtureRow {
            code: b"2",
            names: Some(vec![("main", "Brot")]),
            tags: vec!["en:germany"],
            price_cents: Some(250),
            day: None,
        },
        FixtureRow {
            code: b"3",
            names: Some(vec![("main", "Kase")]),
            tags: vec!["en:france", "en:switzerland"],
            price_cents: None,
            day: Some(19_001),
        },
        FixtureRow {
            code: b"4",
            names: None,
            tags: vec!["en:switzerland-east"],
            price_cents: Some(99),
            day: None,
        },
        FixtureRow {
            code: b"5",
            names: Some(vec![("main", "Pasta")]),
            tags: vec!["en:italy"],
            price_cents: None,
            day: None,
        },
    ]
}

fn write_fixture(dir: &Path) -> PathBuf {
    let rows = fixture_rows();
    let name_fields = Fields::from(vec![
        Field::new("lang", DataType::Utf8, true),
        Field::new("text", DataType::Utf8, true),
    ]);

    let codes = BinaryArray::from_vec(rows.iter().map(|row| row.code).collect());
    let prices = Decimal128Array::from(rows.iter().map(|row| row.price_cents).collect::<Vec<_>>())
        .with_precision_and_scale(10, 2)
        .expect("decimal precision");
    let days = Date32Array::from(rows.iter().map(|row| row.day).collect::<Vec<_>>());

    let mut names = ListBuilder::new(StructBuilder::from_fields(name_fields, rows.len()));
    let mut tags = ListBuilder::new(StringBuilder::new());
    for row in &rows {
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
                        .append_value(text);
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
        ("code", Arc::new(codes) as ArrayRef),
        ("product_name", Arc::new(names.finish()) as ArrayRef),
        ("countries_tags", Arc::new(tags.finish()) as ArrayRef),
        ("price", Arc::new(prices) as ArrayRef),
        ("day", Arc::new(days) as ArrayRef),
    ])
    .expect("build batch");

    let path = dir.join("food.parquet");
    let file = std::fs::File::create(&path).expect("create fixture");
    let props = WriterProperties::builder()
        .set_max_row_group_size(2)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).expect("writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
    path
}

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_fixture(dir.path());
    (dir, path)
}

fn pairs(products: &[Product]) -> Vec<(String, String)> {
    products
        .iter()
        .map(|product| (product.name().to_string(), product.code().to_string()))
        .collect()
}

#[test]
fn file_pass_is_independent_of_window_size() {
    let (_dir, path) = fixture();
    let expected = vec![
        ("main Milk".to_string(), "1".to_string()),
        ("main Kase".to_string(), "3".to_string()),
        (String::new(), "4".to_string()),
    ];

    for window in [1, 2, 3, 100] {
        let options = ExtractOptions::default().with_window_size(window);
        let outcome = extract_file(&path, &options).expect("file pass");
        assert_eq!(pairs(&outcome.products), expected, "window size {window}");
        assert_eq!(outcome.report.state, PassState::Done);
        assert_eq!(outcome.report.total_rows, 5);
        assert_eq!(outcome.report.rows_scanned, 5);
        assert_eq!(outcome.report.windows, 5usize.div_ceil(window));
    }
}

#[test]
fn file_can_be_reopened_after_a_pass() {
    let (_dir, path) = fixture();
    let options = ExtractOptions::default().with_window_size(2);
    let first = extract_file(&path, &options).expect("first pass");
    let second = extract_file(&path, &options).expect("second pass");
    assert_eq!(first.products, second.products);
}

#[test]
fn missing_file_is_a_dataset_error() {
    let err = extract_file("nowhere/food.parquet", &ExtractOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Dataset(DatasetError::FileNotFound { .. })
    ));
    assert!(!err.is_configuration());
}

#[test]
fn invalid_options_fail_before_opening() {
    let options = ExtractOptions::default().with_window_size(0);
    let err = extract_file("nowhere/food.parquet", &options).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidWindowSize { size: 0 }));
}

#[test]
fn decimal_and_date_columns_normalize_to_scalars() {
    let (_dir, path) = fixture();
    let mut dataset = ParquetDataset::open(&path).expect("open");
    let window = dataset.next_window(5).expect("read window");

    assert_eq!(normalize_field(&window[0], "price"), Node::scalar("12.34"));
    assert_eq!(normalize_field(&window[0], "day"), Node::scalar("2022-01-08"));
    assert_eq!(normalize_field(&window[1], "day"), Node::Missing);
    dataset.close();
}

#[test]
fn decimal_column_can_drive_the_filter() {
    let (_dir, path) = fixture();
    let options = ExtractOptions::default().with_tag("price", "12.34");
    let outcome = extract_file(&path, &options).expect("file pass");
    assert_eq!(pairs(&outcome.products), [("main Milk".to_string(), "1".to_string())]);
}
