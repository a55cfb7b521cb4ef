//! Flattening of structured list elements.

use foodfacts_model::RawRecord;

/// Collect the non-empty string values of a structured sub-record.
///
/// Sub-fields are visited in declaration order. Null and empty sub-fields are
/// skipped, as are nested records, lists and maps: only direct scalar values
/// are flattened. A `{lang, text}` pair therefore yields `[lang, text]`.
pub fn extract_struct_strings(record: &RawRecord) -> Vec<String> {
    let mut result = Vec::with_capacity(record.len());
    for (_, value) in record.fields() {
        if let Some(text) = value.scalar_text()
            && !text.is_empty()
        {
            result.push(text);
        }
    }
    result
}
