use std::time::Instant;

use anyhow::{Context, Result};
use foodfacts_extract::{ExtractOptions, extract_file};
use foodfacts_parquet::{DatasetInfo, inspect};
use tracing::{info, info_span, warn};

use foodfacts_cli::config::FileConfig;
use foodfacts_cli::export::{ExportFormat, write_products};
use foodfacts_cli::types::ExtractResult;

use crate::cli::{ExtractArgs, InspectArgs, OutputFormatArg};

pub fn run_extract(args: &ExtractArgs, config: Option<&FileConfig>) -> Result<ExtractResult> {
    let options = resolve_options(args, config);
    if options.parallel && !cfg!(feature = "rayon") {
        warn!("--parallel has no effect without the rayon build feature");
    }

    let outcome = extract_file(&args.dataset, &options)
        .with_context(|| format!("extract products from {}", args.dataset.display()))?;

    let output = match &args.output {
        Some(path) => {
            let format = export_format(args);
            let span = info_span!("export", path = %path.display(), ?format);
            let _guard = span.enter();
            let start = Instant::now();
            write_products(&outcome.products, path, format)?;
            info!(
                products = outcome.products.len(),
                duration_ms = start.elapsed().as_millis(),
                "products written"
            );
            Some(path.clone())
        }
        None => None,
    };

    Ok(ExtractResult {
        dataset: args.dataset.clone(),
        options,
        products: outcome.products,
        report: outcome.report,
        output,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<DatasetInfo> {
    inspect(&args.dataset).with_context(|| format!("inspect {}", args.dataset.display()))
}

/// Defaults, then the config file, then command-line flags.
fn resolve_options(args: &ExtractArgs, config: Option<&FileConfig>) -> ExtractOptions {
    let mut options = match config {
        Some(config) => config.extract.apply(ExtractOptions::default()),
        None => ExtractOptions::default(),
    };
    if let Some(size) = args.window_size {
        options.window_size = size;
    }
    if let Some(field) = &args.tag_field {
        options.tag_field.clone_from(field);
    }
    if let Some(tag) = &args.tag {
        options.tag_value.clone_from(tag);
    }
    if let Some(field) = &args.name_field {
        options.name_field.clone_from(field);
    }
    if let Some(field) = &args.code_field {
        options.code_field.clone_from(field);
    }
    if let Some(policy) = args.name_policy {
        options.name_policy = policy.into();
    }
    if args.parallel {
        options.parallel = true;
    }
    options
}

fn export_format(args: &ExtractArgs) -> ExportFormat {
    match args.format {
        Some(OutputFormatArg::Csv) => ExportFormat::Csv,
        Some(OutputFormatArg::Json) => ExportFormat::Json,
        None => args
            .output
            .as_deref()
            .and_then(ExportFormat::from_path)
            .unwrap_or(ExportFormat::Csv),
    }
}
