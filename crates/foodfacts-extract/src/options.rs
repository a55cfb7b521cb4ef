//! Configuration for an extraction pass.

use foodfacts_normalize::NamePolicy;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// Default number of rows pulled per window.
///
/// The full product dataset cannot be decoded at once. 100,000 rows peak at
/// roughly 11 GB of RAM, which fits a 16 GB machine; lower it on smaller
/// machines. Larger windows run faster and use more memory.
pub const DEFAULT_WINDOW_SIZE: usize = 100_000;

pub const DEFAULT_TAG_FIELD: &str = "countries_tags";
pub const DEFAULT_TAG_VALUE: &str = "en:switzerland";
pub const DEFAULT_NAME_FIELD: &str = "product_name";
pub const DEFAULT_CODE_FIELD: &str = "code";

/// Options for one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Maximum rows decoded per window. Bounds peak memory.
    pub window_size: usize,

    /// Field holding the tags to filter on.
    pub tag_field: String,

    /// Substring a tag value must contain for the row to be kept.
    pub tag_value: String,

    /// Field the display name is resolved from.
    pub name_field: String,

    /// Field holding the product's natural identifier.
    pub code_field: String,

    /// How a multi-valued name collapses into one string.
    pub name_policy: NamePolicy,

    /// Normalize the rows of a window in parallel.
    /// Only honored when built with the `rayon` feature.
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            tag_field: DEFAULT_TAG_FIELD.to_string(),
            tag_value: DEFAULT_TAG_VALUE.to_string(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            code_field: DEFAULT_CODE_FIELD.to_string(),
            name_policy: NamePolicy::default(),
            parallel: false,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Filter on `field` containing `value`.
    #[must_use]
    pub fn with_tag(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.tag_field = field.into();
        self.tag_value = value.into();
        self
    }

    #[must_use]
    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    #[must_use]
    pub fn with_code_field(mut self, field: impl Into<String>) -> Self {
        self.code_field = field.into();
        self
    }

    #[must_use]
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Check the options before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidWindowSize`] for a zero window and
    /// [`ExtractError::MissingField`] for any blank field name or tag value.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ExtractError::InvalidWindowSize {
                size: self.window_size,
            });
        }
        let required = [
            ("tag field name", &self.tag_field),
            ("tag value", &self.tag_value),
            ("name field name", &self.name_field),
            ("code field name", &self.code_field),
        ];
        for (role, value) in required {
            if value.trim().is_empty() {
                return Err(ExtractError::MissingField { role });
            }
        }
        Ok(())
    }
}
