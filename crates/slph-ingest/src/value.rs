//! Conversion of Polars cells into raw phone entries.

use polars::prelude::AnyValue;
use slph_core::RawPhoneEntry;

/// Converts a Polars `AnyValue` into a [`RawPhoneEntry`].
///
/// Nulls become `Missing`; integer and float cells keep their numeric form so
/// the normalizer can render them in natural decimal notation.
pub fn raw_entry(value: AnyValue<'_>) -> RawPhoneEntry {
    match value {
        AnyValue::Null => RawPhoneEntry::Missing,
        AnyValue::Int32(v) => RawPhoneEntry::Integer(i64::from(v)),
        AnyValue::Int64(v) => RawPhoneEntry::Integer(v),
        AnyValue::UInt32(v) => RawPhoneEntry::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => RawPhoneEntry::Integer(v),
            Err(_) => RawPhoneEntry::Text(v.to_string()),
        },
        AnyValue::Float32(v) => RawPhoneEntry::Float(f64::from(v)),
        AnyValue::Float64(v) => RawPhoneEntry::Float(v),
        AnyValue::String(s) => RawPhoneEntry::Text(s.to_string()),
        AnyValue::StringOwned(s) => RawPhoneEntry::Text(s.to_string()),
        other => RawPhoneEntry::Text(display_unquoted(&other)),
    }
}

// Display wraps some values in quotes.
fn display_unquoted(value: &AnyValue<'_>) -> String {
    let s = value.to_string();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        s[1..s.len() - 1].to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_missing() {
        assert_eq!(raw_entry(AnyValue::Null), RawPhoneEntry::Missing);
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            raw_entry(AnyValue::Int64(712345678)),
            RawPhoneEntry::Integer(712345678)
        );
        assert_eq!(raw_entry(AnyValue::Int32(42)), RawPhoneEntry::Integer(42));
        assert_eq!(
            raw_entry(AnyValue::UInt64(u64::MAX)),
            RawPhoneEntry::Text(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            raw_entry(AnyValue::Float64(712345678.0)),
            RawPhoneEntry::Float(712345678.0)
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            raw_entry(AnyValue::String("+94 71 234 5678")),
            RawPhoneEntry::Text("+94 71 234 5678".to_string())
        );
    }

    #[test]
    fn test_boolean_falls_back_to_text() {
        assert_eq!(
            raw_entry(AnyValue::Boolean(true)),
            RawPhoneEntry::Text("true".to_string())
        );
    }
}
