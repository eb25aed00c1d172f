//! SHA-256 hashing of canonical phone numbers.

use sha2::{Digest, Sha256};

use crate::model::{CanonicalPhone, HashedPhone};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`.
///
/// Accepts any string; callers hashing audience identifiers should go through
/// [`hash_canonical`].
pub fn sha256_hex(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(digest)
}

/// Hash a canonical phone number for a Custom Audience upload.
pub fn hash_canonical(phone: &CanonicalPhone) -> HashedPhone {
    HashedPhone::from_hex(sha256_hex(phone.as_str()))
}
