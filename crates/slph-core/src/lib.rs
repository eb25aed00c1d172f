//! Phone normalization and hashing core.
//!
//! Turns raw phone cells from an uploaded table into SHA-256 digests of the
//! canonical Sri Lankan international form (`94` + 9 digits), the format
//! advertising platforms expect for Custom Audience uploads.
//!
//! # Overview
//!
//! - **Normalizer**: [`normalize`] maps a [`RawPhoneEntry`] to an explicit
//!   [`Normalization`] (`Accepted` or `Rejected`)
//! - **Hasher**: [`hash_canonical`] renders a [`CanonicalPhone`] as a 64-char
//!   lowercase hex [`HashedPhone`]
//! - **Pipeline**: [`process_entries`] runs both over a column, keeping input
//!   row order and dropping rejected rows
//!
//! # Example
//!
//! ```
//! use slph_core::{PipelineOptions, RawPhoneEntry, process_entries};
//!
//! let entries = vec![
//!     RawPhoneEntry::from("0712345678"),
//!     RawPhoneEntry::from("abc"),
//!     RawPhoneEntry::Missing,
//! ];
//! let outcome = process_entries(&entries, &PipelineOptions::default());
//! assert_eq!(outcome.accepted_count(), 1);
//! assert_eq!(outcome.accepted[0].row, 0);
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: every row is processed independently
//! - **Rejection is a value**: no error type exists for malformed numbers
//! - **No PHI in logs**: row values go through [`redact::redact_value`]

mod hash;
mod model;
mod normalize;
mod pipeline;
mod text;

pub mod redact;

pub use hash::{hash_canonical, sha256_hex};
pub use model::{
    CanonicalPhone, HashedPhone, HashedRow, Normalization, RawPhoneEntry, RejectedRow,
};
pub use normalize::{
    COUNTRY_CODE, INTERNATIONAL_LEN, LOCAL_LEN, normalize, normalize_str, strip_non_digits,
};
pub use pipeline::{PipelineOptions, PipelineOutcome, hash_entry, process_entries};
pub use text::format_numeric;
