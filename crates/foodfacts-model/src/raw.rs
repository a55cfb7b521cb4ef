//! Decoded dataset rows.
//!
//! A [`RawRecord`] is one row as handed over by a dataset reader. Its fields
//! keep whatever shape the underlying schema gave them: absent, null, a
//! scalar, a list, or a nested record. Nothing here interprets those shapes;
//! that is the normalizer's job.

use std::fmt;

/// One decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Null scalar, null pointer or null group.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    /// Byte array column. Usually UTF-8 text stored without a string annotation.
    Bytes(Vec<u8>),
    List(Vec<RawValue>),
    Record(RawRecord),
    /// A decoded value with no scalar or nested form of its own (maps),
    /// carried as the reader's display text.
    Other(String),
}

impl RawValue {
    /// Shorthand for a string value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Shorthand for a list of string values.
    pub fn text_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|v| Self::Str(v.into())).collect())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text of a scalar value, or `None` for null, lists, records and
    /// opaque values.
    ///
    /// Byte arrays are decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::UInt(value) => Some(value.to_string()),
            Self::Float(value) => Some(format_numeric(*value)),
            Self::Str(value) => Some(value.clone()),
            Self::Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            Self::Null | Self::List(_) | Self::Record(_) | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(record) => write!(f, "{record}"),
            Self::Other(text) => f.write_str(text),
            scalar => match scalar.scalar_text() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One dataset row (or one nested group), fields in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping declaration order.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Look up a field by name.
    ///
    /// An exact match wins; otherwise the first field whose name matches
    /// ignoring ASCII case is returned. Returns `None` when the field is absent.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(field, _)| field.eq_ignore_ascii_case(name))
            })
            .map(|(_, value)| value)
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Formats a floating-point number without trailing zeros.
///
/// # Examples
///
/// ```
/// use foodfacts_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
