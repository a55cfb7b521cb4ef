//! Conversion from the `parquet` record API to [`RawRecord`].

use foodfacts_model::{RawRecord, RawValue};
use parquet::record::{Field, Row};

/// Convert a decoded row (or nested group) into a [`RawRecord`], keeping
/// schema order.
pub(crate) fn convert_row(row: &Row) -> RawRecord {
    row.get_column_iter()
        .map(|(name, field)| (name.clone(), convert_field(field)))
        .collect()
}

/// Convert one decoded field.
///
/// Scalars map onto the matching [`RawValue`] variant, groups and lists are
/// converted recursively. Decimals, dates, times and timestamps become text
/// scalars in the reader's rendering. Only maps fall back to [`RawValue::Other`].
pub(crate) fn convert_field(field: &Field) -> RawValue {
    match field {
        Field::Null => RawValue::Null,
        Field::Bool(value) => RawValue::Bool(*value),
        Field::Byte(value) => RawValue::Int(i64::from(*value)),
        Field::Short(value) => RawValue::Int(i64::from(*value)),
        Field::Int(value) => RawValue::Int(i64::from(*value)),
        Field::Long(value) => RawValue::Int(*value),
        Field::UByte(value) => RawValue::UInt(u64::from(*value)),
        Field::UShort(value) => RawValue::UInt(u64::from(*value)),
        Field::UInt(value) => RawValue::UInt(u64::from(*value)),
        Field::ULong(value) => RawValue::UInt(*value),
        Field::Float16(value) => RawValue::Float(f64::from(*value)),
        Field::Float(value) => RawValue::Float(f64::from(*value)),
        Field::Double(value) => RawValue::Float(*value),
        Field::Str(value) => RawValue::Str(value.clone()),
        Field::Bytes(value) => RawValue::Bytes(value.data().to_vec()),
        Field::Group(row) => RawValue::Record(convert_row(row)),
        Field::ListInternal(list) => {
            RawValue::List(list.elements().iter().map(convert_field).collect())
        }
        Field::MapInternal(_) => RawValue::Other(field.to_string()),
        scalar => RawValue::Str(scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::data_type::{ByteArray, Decimal};

    #[test]
    fn scalars_map_to_raw_values() {
        assert_eq!(convert_field(&Field::Null), RawValue::Null);
        assert_eq!(convert_field(&Field::Int(-4)), RawValue::Int(-4));
        assert_eq!(convert_field(&Field::ULong(9)), RawValue::UInt(9));
        assert_eq!(
            convert_field(&Field::Str("en:switzerland".to_string())),
            RawValue::text("en:switzerland")
        );
    }

    #[test]
    fn byte_arrays_stay_bytes() {
        let field = Field::Bytes(ByteArray::from(vec![b'4', b'2']));
        assert_eq!(convert_field(&field), RawValue::Bytes(b"42".to_vec()));
    }

    #[test]
    fn decimals_and_dates_are_text_scalars() {
        let price = Field::Decimal(Decimal::from_i32(1234, 10, 2));
        assert_eq!(convert_field(&price), RawValue::text("12.34"));

        let day = convert_field(&Field::Date(19_000));
        assert_eq!(day, RawValue::text("2022-01-08"));
        assert!(day.scalar_text().is_some());
    }
}
