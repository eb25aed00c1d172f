//! JSON run report.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use slph_core::{HashedRow, PipelineOutcome};
use tracing::info;

use crate::common::write_file;
use crate::error::{OutputError, Result};

/// Summary of one hashing run, written next to the export on request.
///
/// Contains counts and digests only; raw phone numbers never appear here.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub column: String,
    pub total_rows: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub unique_hashes: usize,
    /// First surviving rows, as shown in the preview.
    pub sample: Vec<HashedRow>,
    /// RFC 3339 timestamp.
    pub generated_at: String,
}

impl RunReport {
    pub fn from_outcome(
        input: &Path,
        output: Option<&Path>,
        column: &str,
        outcome: &PipelineOutcome,
        sample_rows: usize,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.map(Path::to_path_buf),
            column: column.to_string(),
            total_rows: outcome.total_rows,
            accepted: outcome.accepted_count(),
            rejected: outcome.rejected_count(),
            unique_hashes: outcome.unique_hash_count(),
            sample: outcome.preview(sample_rows).to_vec(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write `report` as pretty-printed JSON.
pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(report).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push(b'\n');
    write_file(path, &json)?;
    info!(path = %path.display(), "run report written");
    Ok(())
}
