//! Per-field logic applied to every dataset row.
//!
//! - **normalizer**: resolves a raw field of any shape into a [`Node`]
//! - **structs**: flattens structured list elements such as `{lang, text}` pairs
//! - **filter**: tag containment test over a normalized field
//! - **names**: display-name and code resolution from a normalized field
//!
//! Everything here is a pure function of its input.
//!
//! [`Node`]: foodfacts_model::Node

pub mod filter;
pub mod names;
pub mod normalizer;
pub mod structs;

pub use filter::matches_tag;
pub use names::{NamePolicy, coerce_code, resolve_name};
pub use normalizer::{normalize_field, normalize_value};
pub use structs::extract_struct_strings;
