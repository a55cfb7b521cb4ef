//! The extraction pass.
//!
//! A pass pulls windows from a [`RowSource`] until it is exhausted. Every row
//! of a window is normalized, filtered on its tag field and, when kept,
//! turned into a [`Product`]. A window is fully processed before the next one
//! is requested, so peak memory is one window of decoded rows plus the
//! products accumulated so far.
//!
//! A pass is all-or-nothing: if a read fails, the products gathered from
//! earlier windows are dropped together with the error.

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use foodfacts_model::{Node, Product, RawRecord};
use foodfacts_normalize::{coerce_code, matches_tag, normalize_field, resolve_name};
use foodfacts_parquet::{ParquetDataset, RowSource};
use tracing::{debug, info, info_span, trace, warn};

use crate::error::Result;
use crate::options::ExtractOptions;

/// Where a pass currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    #[default]
    Idle,
    /// Waiting on the reader for window `window` (zero-based).
    Reading { window: usize },
    /// Normalizing and filtering the rows of window `window`.
    Processing { window: usize },
    Done,
    Failed,
}

impl PassState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for PassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Reading { window } => write!(f, "reading window {window}"),
            Self::Processing { window } => write!(f, "processing window {window}"),
            Self::Done => f.write_str("done"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Counters for a finished (or failed) pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Non-empty windows processed.
    pub windows: usize,
    /// Row count the reader reported at open.
    pub total_rows: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub state: PassState,
    pub elapsed: Duration,
}

/// Products and counters of a successful pass.
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
    pub products: Vec<Product>,
    pub report: PassReport,
}

/// Drives one pass over a row source.
#[derive(Debug)]
pub struct PassDriver<'a> {
    options: &'a ExtractOptions,
    state: PassState,
    report: PassReport,
}

impl<'a> PassDriver<'a> {
    /// Create a driver after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the options are invalid. No read
    /// has happened at that point.
    pub fn new(options: &'a ExtractOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            state: PassState::Idle,
            report: PassReport::default(),
        })
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// Counters so far. After a failed pass they describe the work done
    /// before the failure.
    pub fn report(&self) -> &PassReport {
        &self.report
    }

    /// Run the pass to completion.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if any window fails to read; nothing
    /// accumulated before the failure is returned.
    pub fn run<S: RowSource + ?Sized>(&mut self, source: &mut S) -> Result<PassOutcome> {
        let options = self.options;
        let span = info_span!(
            "pass",
            tag_field = %options.tag_field,
            tag_value = %options.tag_value,
            window_size = options.window_size
        );
        let _guard = span.enter();
        let start = Instant::now();

        self.report = PassReport {
            total_rows: source.total_rows(),
            ..PassReport::default()
        };
        info!(total_rows = self.report.total_rows, "extraction pass started");

        let mut products = Vec::new();
        let mut window_index = 0usize;
        loop {
            self.state = PassState::Reading {
                window: window_index,
            };
            let first_row = source.rows_read();
            let window = match source.next_window(options.window_size) {
                Ok(window) => window,
                Err(error) => {
                    self.state = PassState::Failed;
                    self.report.state = PassState::Failed;
                    self.report.elapsed = start.elapsed();
                    warn!(
                        window = window_index,
                        discarded = products.len(),
                        %error,
                        "read failed, discarding pass results"
                    );
                    return Err(error.into());
                }
            };
            if window.is_empty() {
                break;
            }

            self.state = PassState::Processing {
                window: window_index,
            };
            let rows = window.len() as u64;
            let matched = process_window(&window, options, first_row);
            drop(window);
            debug!(
                window = window_index,
                first_row,
                rows,
                matched = matched.len(),
                "window processed"
            );
            self.report.windows += 1;
            self.report.rows_scanned += rows;
            self.report.rows_matched += matched.len() as u64;
            products.extend(matched);
            window_index += 1;
        }

        if self.report.rows_scanned != self.report.total_rows {
            warn!(
                reported = self.report.total_rows,
                scanned = self.report.rows_scanned,
                "reader row count differs from rows scanned"
            );
        }
        self.state = PassState::Done;
        self.report.state = PassState::Done;
        self.report.elapsed = start.elapsed();
        info!(
            windows = self.report.windows,
            rows_scanned = self.report.rows_scanned,
            rows_matched = self.report.rows_matched,
            duration_ms = self.report.elapsed.as_millis(),
            "extraction pass complete"
        );
        Ok(PassOutcome {
            products,
            report: self.report.clone(),
        })
    }
}

/// Turn one row into a product if its tag field matches.
///
/// The name is resolved with the configured [`NamePolicy`]; the code is
/// collapsed to a single string.
///
/// [`NamePolicy`]: foodfacts_normalize::NamePolicy
pub fn process_row(record: &RawRecord, options: &ExtractOptions) -> Option<Product> {
    evaluate_row(record, options).map(|(_, product)| product)
}

fn evaluate_row(record: &RawRecord, options: &ExtractOptions) -> Option<(Node, Product)> {
    let tags = normalize_field(record, &options.tag_field);
    if !matches_tag(&tags, &options.tag_value) {
        return None;
    }
    let name = resolve_name(
        &normalize_field(record, &options.name_field),
        options.name_policy,
    );
    let code = coerce_code(normalize_field(record, &options.code_field));
    Some((tags, Product::new(name, code)))
}

fn match_row(record: &RawRecord, options: &ExtractOptions, row: u64) -> Option<Product> {
    let (tags, product) = evaluate_row(record, options)?;
    trace!(
        row,
        %tags,
        name = product.name(),
        code = product.code(),
        "row matched"
    );
    Some(product)
}

fn process_window_sequential(
    window: &[RawRecord],
    options: &ExtractOptions,
    first_row: u64,
) -> Vec<Product> {
    window
        .iter()
        .enumerate()
        .filter_map(|(offset, record)| match_row(record, options, first_row + offset as u64))
        .collect()
}

// Parallel output keeps the window's row order.
#[cfg(feature = "rayon")]
fn process_window(window: &[RawRecord], options: &ExtractOptions, first_row: u64) -> Vec<Product> {
    use rayon::prelude::*;

    if !options.parallel {
        return process_window_sequential(window, options, first_row);
    }
    window
        .par_iter()
        .enumerate()
        .filter_map(|(offset, record)| match_row(record, options, first_row + offset as u64))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn process_window(window: &[RawRecord], options: &ExtractOptions, first_row: u64) -> Vec<Product> {
    process_window_sequential(window, options, first_row)
}

/// Run one pass over `source` and return the matching products.
///
/// # Errors
///
/// Configuration errors are returned before the first read; a read failure
/// aborts the pass and discards all products.
pub fn run<S: RowSource + ?Sized>(source: &mut S, options: &ExtractOptions) -> Result<Vec<Product>> {
    extract(source, options).map(|outcome| outcome.products)
}

/// Like [`run`], also returning the pass counters.
pub fn extract<S: RowSource + ?Sized>(
    source: &mut S,
    options: &ExtractOptions,
) -> Result<PassOutcome> {
    PassDriver::new(options)?.run(source)
}

/// Open the Parquet file at `path`, run one pass and close it.
///
/// The file is released on every exit path, including a failed read.
pub fn extract_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<PassOutcome> {
    let mut driver = PassDriver::new(options)?;
    let mut dataset = ParquetDataset::open(path)?;
    let outcome = driver.run(&mut dataset)?;
    dataset.close();
    Ok(outcome)
}
