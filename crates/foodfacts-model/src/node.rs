//! Normalized field values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The normalized, schema-independent value of one field.
///
/// Produced by the normalizer; never carries nested structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    #[default]
    Missing,
    Scalar(String),
    List(Vec<String>),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// All text values held by the node, in order.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Missing => &[],
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::List(items) => items,
        }
    }

    /// Collapse the node into a single string.
    ///
    /// Scalars are returned as-is, lists are joined with a single space and
    /// a missing value becomes the empty string.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Scalar(value) => value,
            Self::List(items) => items.join(" "),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Scalar(value) => f.write_str(value),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}
