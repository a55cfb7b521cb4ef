//! Field value normalization.
//!
//! Resolution rules, in order:
//!
//! 1. absent or null → [`Node::Missing`]
//! 2. scalar (string, number, boolean, UTF-8 bytes) → [`Node::Scalar`]
//! 3. list of (nullable) scalars → [`Node::List`] of the non-null values
//! 4. list of records → [`Node::List`] of every element's non-empty strings
//! 5. anything else → best-effort text wrapped in a one-element list
//!
//! Normalization is total: no input shape produces an error.

use foodfacts_model::{Node, RawRecord, RawValue};

use crate::structs::extract_struct_strings;

/// Normalize the field `name` of `record`.
pub fn normalize_field(record: &RawRecord, name: &str) -> Node {
    normalize_value(record.get(name))
}

/// Normalize one decoded value. `None` means the field is absent.
pub fn normalize_value(value: Option<&RawValue>) -> Node {
    let Some(value) = value else {
        return Node::Missing;
    };
    match value {
        RawValue::Null => Node::Missing,
        RawValue::List(items) => Node::List(flatten_list(items)),
        RawValue::Record(record) => {
            let strings = extract_struct_strings(record);
            if strings.is_empty() {
                Node::Missing
            } else {
                Node::List(strings)
            }
        }
        RawValue::Other(text) => Node::List(vec![text.clone()]),
        scalar => match scalar.scalar_text() {
            Some(text) => Node::Scalar(text),
            None => Node::List(vec![scalar.to_string()]),
        },
    }
}

fn flatten_list(items: &[RawValue]) -> Vec<String> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            RawValue::Null => {}
            RawValue::Record(record) => out.extend(extract_struct_strings(record)),
            RawValue::List(_) | RawValue::Other(_) => out.push(item.to_string()),
            scalar => {
                if let Some(text) = scalar.scalar_text() {
                    out.push(text);
                }
            }
        }
    }
    out
}
