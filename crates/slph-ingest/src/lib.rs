//! Phone table ingestion.
//!
//! Loads an uploaded CSV into a Polars DataFrame and extracts the `phone`
//! column as [`slph_core::RawPhoneEntry`] values, one per row.
//!
//! # Features
//!
//! - **CSV Loading**: size and encoding checks, every cell read as text
//! - **Column Check**: missing `phone` column is reported before parsing rows
//! - **Column Hints**: phone-like header names suggested on a miss
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use slph_ingest::{IngestOptions, read_phone_table};
//!
//! let table = read_phone_table(Path::new("contacts.csv"), &IngestOptions::default())?;
//! println!("{} rows", table.len());
//! ```

mod csv;
mod error;
mod hints;
mod table;
mod value;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    MAX_CSV_FILE_SIZE, check_file_size, read_csv_frame, read_csv_headers, validate_encoding,
};

// === Phone Column ===
pub use table::{
    DEFAULT_PHONE_COLUMN, IngestOptions, PhoneTable, phone_entries, read_phone_table,
};
pub use value::raw_entry;

// === Column Hints ===
pub use hints::suggest_phone_columns;
