//! Loading the phone column of an uploaded table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use slph_core::RawPhoneEntry;
use tracing::{debug, info, warn};

use crate::csv::{
    MAX_CSV_FILE_SIZE, check_file_size, normalize_header, read_csv_frame, read_csv_headers,
    validate_encoding,
};
use crate::error::{IngestError, Result};
use crate::hints::suggest_phone_columns;
use crate::value::raw_entry;

/// Column name expected to hold phone numbers.
pub const DEFAULT_PHONE_COLUMN: &str = "phone";

/// Options for reading a phone table.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Name of the phone column (exact, case-sensitive).
    pub column: String,
    /// Largest file accepted, in bytes.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_PHONE_COLUMN.to_string(),
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}

/// Phone column of a loaded table.
#[derive(Debug, Clone)]
pub struct PhoneTable {
    pub path: PathBuf,
    /// All header names, in file order.
    pub columns: Vec<String>,
    /// Name of the column the entries were taken from.
    pub column: String,
    /// One entry per data row, in file order.
    pub entries: Vec<RawPhoneEntry>,
}

impl PhoneTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads `path` and extracts its phone column.
///
/// Fails with [`IngestError::MissingPhoneColumn`] before parsing the body when
/// the header row lacks the configured column.
pub fn read_phone_table(path: &Path, options: &IngestOptions) -> Result<PhoneTable> {
    let start = Instant::now();
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;

    let columns = read_csv_headers(path)?;
    if !columns.iter().any(|name| name == &options.column) {
        let suggestions = suggest_phone_columns(&columns);
        warn!(
            path = %path.display(),
            column = %options.column,
            suggestions = ?suggestions,
            "phone column missing"
        );
        return Err(IngestError::MissingPhoneColumn {
            column: options.column.clone(),
            path: path.to_path_buf(),
            available: columns,
        });
    }

    let df = read_csv_frame(path)?;
    let entries = phone_entries(&df, &options.column)?;
    info!(
        path = %path.display(),
        rows = entries.len(),
        columns = columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "phone table loaded"
    );

    Ok(PhoneTable {
        path: path.to_path_buf(),
        columns,
        column: options.column.clone(),
        entries,
    })
}

/// Extracts one [`RawPhoneEntry`] per row of `column`.
pub fn phone_entries(df: &DataFrame, column: &str) -> Result<Vec<RawPhoneEntry>> {
    let name = resolve_column(df, column).ok_or_else(|| IngestError::MissingPhoneColumn {
        column: column.to_string(),
        path: PathBuf::new(),
        available: df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    })?;
    let col = df.column(&name)?;
    debug!(column = %name, dtype = %col.dtype(), "extracting phone column");

    let mut entries = Vec::with_capacity(col.len());
    for idx in 0..col.len() {
        entries.push(raw_entry(col.get(idx)?));
    }
    Ok(entries)
}

// The frame may keep a byte order mark on its first column name.
fn resolve_column(df: &DataFrame, column: &str) -> Option<String> {
    df.get_column_names()
        .into_iter()
        .find(|name| normalize_header(name.as_str()) == column)
        .map(|name| name.to_string())
}
