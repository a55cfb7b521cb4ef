//! Display-name resolution.

use std::fmt;
use std::str::FromStr;

use foodfacts_model::Node;
use serde::{Deserialize, Serialize};

/// How a multi-valued field collapses into one display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Take the first list item (one name per language, pick the first).
    First,
    /// Join the list items with a single space, in order.
    #[default]
    Join,
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Join => f.write_str("join"),
        }
    }
}

impl FromStr for NamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "join" => Ok(Self::Join),
            other => Err(format!("unknown name policy: {other}")),
        }
    }
}

/// Resolve a display name from a normalized field.
///
/// Missing yields the empty string and a scalar is returned unchanged. Lists
/// follow `policy`; an empty list yields the empty string under both.
pub fn resolve_name(node: &Node, policy: NamePolicy) -> String {
    match node {
        Node::Missing => String::new(),
        Node::Scalar(value) => value.clone(),
        Node::List(items) => match policy {
            NamePolicy::First => items.first().cloned().unwrap_or_default(),
            NamePolicy::Join => items.join(" "),
        },
    }
}

/// Collapse a code field into a single identifier string.
///
/// Scalars pass through, lists are space-joined and a missing code is empty.
pub fn coerce_code(node: Node) -> String {
    node.into_text()
}
