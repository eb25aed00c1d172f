//! Suggestions for a misnamed phone column.

const PHONE_LIKE: &[&str] = &["phone", "mobile", "msisdn", "tel", "contact", "number"];

/// Columns that look like they hold phone numbers, in header order.
///
/// Used to point the user at the right column when the expected one is
/// missing; the match is on lowercase substrings.
pub fn suggest_phone_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .filter(|name| {
            let lower = name.trim().to_lowercase();
            PHONE_LIKE.iter().any(|needle| lower.contains(needle))
        })
        .cloned()
        .collect()
}
