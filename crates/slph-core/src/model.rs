//! Value types flowing through the hashing pipeline.

use std::fmt;

use serde::Serialize;

use crate::normalize::{COUNTRY_CODE, INTERNATIONAL_LEN};
use crate::text::format_numeric;

/// One cell of the source `phone` column, taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawPhoneEntry {
    /// No value present in the source row.
    Missing,
    /// Integer cell (e.g. a number column inferred as `i64`).
    Integer(i64),
    /// Floating-point cell.
    Float(f64),
    /// Any textual cell.
    Text(String),
}

impl RawPhoneEntry {
    /// Natural textual form of the cell, or `None` when the cell is missing.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Integer(v) => Some(v.to_string()),
            Self::Float(v) => Some(format_numeric(*v)),
            Self::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<&str> for RawPhoneEntry {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawPhoneEntry {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawPhoneEntry {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawPhoneEntry {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T> From<Option<T>> for RawPhoneEntry
where
    T: Into<RawPhoneEntry>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Normalized phone number: `94` followed by the 9-digit subscriber number.
///
/// Only produced by the normalizer or [`CanonicalPhone::parse`], so the
/// 11-digit `94` shape always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(Self::is_canonical(&digits), "not canonical: {digits}");
        Self(digits)
    }

    /// Accepts a string already in canonical form.
    pub fn parse(value: &str) -> Option<Self> {
        Self::is_canonical(value).then(|| Self(value.to_string()))
    }

    fn is_canonical(value: &str) -> bool {
        value.len() == INTERNATIONAL_LEN
            && value.starts_with(COUNTRY_CODE)
            && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Subscriber number without the country code.
    pub fn subscriber(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }

    /// True for mobile numbers (subscriber number starts with `7`).
    pub fn is_mobile(&self) -> bool {
        self.subscriber().starts_with('7')
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase hex SHA-256 digest of a canonical phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HashedPhone(String);

impl HashedPhone {
    /// Digest length in hex characters.
    pub const LEN: usize = 64;

    pub(crate) fn from_hex(hex: String) -> Self {
        debug_assert_eq!(hex.len(), Self::LEN);
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HashedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of normalizing one raw entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    Accepted(CanonicalPhone),
    Rejected,
}

impl Normalization {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn as_canonical(&self) -> Option<&CanonicalPhone> {
        match self {
            Self::Accepted(phone) => Some(phone),
            Self::Rejected => None,
        }
    }

    pub fn into_canonical(self) -> Option<CanonicalPhone> {
        match self {
            Self::Accepted(phone) => Some(phone),
            Self::Rejected => None,
        }
    }
}

/// Surviving row: source row index and its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashedRow {
    pub row: usize,
    pub hash: HashedPhone,
}

/// Dropped row, kept only when rejection diagnostics are requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub row: usize,
    pub raw: RawPhoneEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_entry_text() {
        assert_eq!(RawPhoneEntry::Missing.to_text(), None);
        assert_eq!(
            RawPhoneEntry::Integer(712345678).to_text().as_deref(),
            Some("712345678")
        );
        assert_eq!(
            RawPhoneEntry::Float(712345678.0).to_text().as_deref(),
            Some("712345678")
        );
        assert_eq!(
            RawPhoneEntry::from("+94 71 234 5678").to_text().as_deref(),
            Some("+94 71 234 5678")
        );
    }

    #[test]
    fn test_raw_entry_from_option() {
        assert!(RawPhoneEntry::from(None::<&str>).is_missing());
        assert_eq!(
            RawPhoneEntry::from(Some("0712345678")),
            RawPhoneEntry::Text("0712345678".to_string())
        );
    }

    #[test]
    fn test_canonical_parse() {
        let phone = CanonicalPhone::parse("94712345678").unwrap();
        assert_eq!(phone.subscriber(), "712345678");
        assert!(phone.is_mobile());

        assert!(CanonicalPhone::parse("0712345678").is_none());
        assert!(CanonicalPhone::parse("9471234567a").is_none());
        assert!(CanonicalPhone::parse("947123456789").is_none());
    }

    #[test]
    fn test_canonical_landline_not_mobile() {
        let phone = CanonicalPhone::parse("94112345678").unwrap();
        assert!(!phone.is_mobile());
    }

    #[test]
    fn test_normalization_accessors() {
        let accepted = Normalization::Accepted(CanonicalPhone::parse("94712345678").unwrap());
        assert!(accepted.is_accepted());
        assert_eq!(accepted.as_canonical().unwrap().as_str(), "94712345678");
        assert!(!Normalization::Rejected.is_accepted());
        assert_eq!(Normalization::Rejected.into_canonical(), None);
    }
}
