//! CLI argument definitions for the `foodfacts` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use foodfacts_normalize::NamePolicy;

#[derive(Parser)]
#[command(
    name = "foodfacts",
    version,
    about = "Extract normalized products from a food facts Parquet dump",
    long_about = "Extract normalized products from a large nested Parquet dump.\n\n\
                  Rows are read in bounded windows, filtered on a tag field and\n\
                  reduced to a name and a code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with an `[extract]` table of defaults.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one extraction pass and print the matching products.
    Extract(ExtractArgs),

    /// Show the row count, row groups and columns of a dataset.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the Parquet dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Rows decoded per window. Lower it to reduce peak memory.
    #[arg(long = "window-size", value_name = "ROWS")]
    pub window_size: Option<usize>,

    /// Field holding the tags to filter on.
    #[arg(long = "tag-field", value_name = "FIELD")]
    pub tag_field: Option<String>,

    /// Substring a tag must contain for the row to be kept.
    #[arg(long = "tag", value_name = "VALUE")]
    pub tag: Option<String>,

    /// Field the product name is resolved from.
    #[arg(long = "name-field", value_name = "FIELD")]
    pub name_field: Option<String>,

    /// Field holding the product code.
    #[arg(long = "code-field", value_name = "FIELD")]
    pub code_field: Option<String>,

    /// How a multi-valued name becomes one string.
    #[arg(long = "name-policy", value_enum)]
    pub name_policy: Option<NamePolicyArg>,

    /// Normalize rows in parallel (needs the `rayon` build feature).
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Write every matched product to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output file format (default: from the file extension, else csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Number of products to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to the Parquet dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NamePolicyArg {
    /// Space-join every value.
    Join,
    /// Keep only the first value.
    First,
}

impl From<NamePolicyArg> for NamePolicy {
    fn from(value: NamePolicyArg) -> Self {
        match value {
            NamePolicyArg::Join => Self::Join,
            NamePolicyArg::First => Self::First,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
