use std::path::PathBuf;

use slph_core::PipelineOutcome;

/// Settings for one `hash` run.
#[derive(Debug, Clone)]
pub struct HashConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub preview_rows: usize,
    pub rejections: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
    /// Keep raw values in the rejection export.
    pub include_raw_rejections: bool,
}

#[derive(Debug)]
pub struct HashResult {
    pub input: PathBuf,
    pub column: String,
    pub outcome: PipelineOutcome,
    pub preview_rows: usize,
    pub outputs: OutputPaths,
}

/// Files written by a run; `None` when skipped.
#[derive(Debug, Default)]
pub struct OutputPaths {
    pub hashed_csv: Option<PathBuf>,
    pub rejections: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

/// One row of `check` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub input: String,
    pub hash: Option<String>,
}
