//! Optional diagnostic export of dropped rows.

use std::path::Path;

use slph_core::RejectedRow;
use slph_core::redact::REDACTED_VALUE;
use tracing::info;

use crate::common::{csv_writer, finish_csv, write_file};
use crate::error::Result;

/// Encode rejected rows as `row,phone`. Raw values are replaced with a
/// redaction token unless `include_raw` is set.
pub fn rejections_csv_bytes(rows: &[RejectedRow], include_raw: bool) -> Result<Vec<u8>> {
    let mut writer = csv_writer();
    writer.write_record(["row", "phone"])?;
    for rejected in rows {
        let phone = if include_raw {
            rejected.raw.to_text().unwrap_or_default()
        } else {
            REDACTED_VALUE.to_string()
        };
        writer.write_record([rejected.row.to_string(), phone])?;
    }
    finish_csv(writer)
}

pub fn write_rejections_csv(path: &Path, rows: &[RejectedRow], include_raw: bool) -> Result<()> {
    let bytes = rejections_csv_bytes(rows, include_raw)?;
    write_file(path, &bytes)?;
    info!(path = %path.display(), rows = rows.len(), "rejections written");
    Ok(())
}
