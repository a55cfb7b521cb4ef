//! Optional TOML configuration file.
//!
//! ```toml
//! [extract]
//! window_size = 50000
//! tag_field = "countries_tags"
//! tag_value = "en:switzerland"
//! name_policy = "first"
//! ```
//!
//! Values set here replace the built-in defaults; command-line flags replace
//! both.

use std::path::Path;

use anyhow::{Context, Result};
use foodfacts_extract::ExtractOptions;
use foodfacts_normalize::NamePolicy;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub extract: ExtractSection,
}

/// The `[extract]` table. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtractSection {
    pub window_size: Option<usize>,
    pub tag_field: Option<String>,
    pub tag_value: Option<String>,
    pub name_field: Option<String>,
    pub code_field: Option<String>,
    pub name_policy: Option<NamePolicy>,
    pub parallel: Option<bool>,
}

impl FileConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl ExtractSection {
    /// Overlay the values present in this table onto `options`.
    #[must_use]
    pub fn apply(&self, mut options: ExtractOptions) -> ExtractOptions {
        if let Some(size) = self.window_size {
            options.window_size = size;
        }
        if let Some(field) = &self.tag_field {
            options.tag_field.clone_from(field);
        }
        if let Some(value) = &self.tag_value {
            options.tag_value.clone_from(value);
        }
        if let Some(field) = &self.name_field {
            options.name_field.clone_from(field);
        }
        if let Some(field) = &self.code_field {
            options.code_field.clone_from(field);
        }
        if let Some(policy) = self.name_policy {
            options.name_policy = policy;
        }
        if let Some(parallel) = self.parallel {
            options.parallel = parallel;
        }
        options
    }
}
