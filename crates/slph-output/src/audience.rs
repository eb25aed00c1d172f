//! Custom Audience export: a single `hashed_phone` column.

use std::path::Path;

use slph_core::HashedRow;
use tracing::info;

use crate::common::{csv_writer, finish_csv, write_file};
use crate::error::Result;

/// Default export file name.
pub const DEFAULT_OUTPUT_FILE: &str = "fb_custom_audience_hashed.csv";

/// Header of the exported column.
pub const HASHED_COLUMN: &str = "hashed_phone";

/// Encode hashed rows as UTF-8 CSV: header plus one digest per line, no index.
pub fn hashed_csv_bytes(rows: &[HashedRow]) -> Result<Vec<u8>> {
    let mut writer = csv_writer();
    writer.write_record([HASHED_COLUMN])?;
    for row in rows {
        writer.write_record([row.hash.as_str()])?;
    }
    finish_csv(writer)
}

/// Write the Custom Audience CSV to `path`.
pub fn write_hashed_csv(path: &Path, rows: &[HashedRow]) -> Result<()> {
    let bytes = hashed_csv_bytes(rows)?;
    write_file(path, &bytes)?;
    info!(path = %path.display(), rows = rows.len(), "hashed CSV written");
    Ok(())
}
