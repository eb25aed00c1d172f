//! Sri Lankan phone number normalization.
//!
//! Accepted inputs, after stripping everything but ASCII digits:
//! - `712345678` (local mobile missing its trunk `0`)
//! - `0712345678` (local format)
//! - `94712345678` (international, with or without `+`)
//!
//! Everything else is rejected. `0094712345678` strips to 13 digits and is
//! rejected as well; there is no international-prefix handling.

use tracing::trace;

use crate::model::{CanonicalPhone, Normalization, RawPhoneEntry};
use crate::redact::redact_value;

/// Sri Lanka country calling code.
pub const COUNTRY_CODE: &str = "94";

/// Digit count of a canonical number (`94` + 9-digit subscriber number).
pub const INTERNATIONAL_LEN: usize = 11;

/// Digit count of a local number including its trunk prefix.
pub const LOCAL_LEN: usize = 10;

const TRUNK_PREFIX: char = '0';

/// Length of a local mobile number given without its trunk prefix.
const BARE_MOBILE_LEN: usize = 9;

const MOBILE_LEAD: char = '7';

/// Normalize a raw table cell.
pub fn normalize(raw: &RawPhoneEntry) -> Normalization {
    match raw.to_text() {
        Some(text) => normalize_str(&text),
        None => Normalization::Rejected,
    }
}

/// Normalize a textual phone number.
pub fn normalize_str(raw: &str) -> Normalization {
    let digits = restore_trunk_prefix(strip_non_digits(raw));
    let result = classify(digits);
    trace!(
        raw = redact_value(raw),
        accepted = result.is_accepted(),
        "normalized phone"
    );
    result
}

/// Remove every character that is not an ASCII decimal digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn restore_trunk_prefix(digits: String) -> String {
    if digits.len() == BARE_MOBILE_LEN && digits.starts_with(MOBILE_LEAD) {
        format!("{TRUNK_PREFIX}{digits}")
    } else {
        digits
    }
}

// A `947` prefix rule is covered by the `94` rule and is not repeated here.
fn classify(digits: String) -> Normalization {
    if digits.len() == LOCAL_LEN && digits.starts_with(TRUNK_PREFIX) {
        let canonical = format!("{COUNTRY_CODE}{}", &digits[1..]);
        Normalization::Accepted(CanonicalPhone::from_digits(canonical))
    } else if digits.len() == INTERNATIONAL_LEN && digits.starts_with(COUNTRY_CODE) {
        Normalization::Accepted(CanonicalPhone::from_digits(digits))
    } else {
        Normalization::Rejected
    }
}
