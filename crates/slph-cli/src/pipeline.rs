//! Hashing run with explicit stages.
//!
//! 1. **Ingest**: Read the CSV and extract the phone column
//! 2. **Process**: Normalize and hash each row, dropping rejected rows
//! 3. **Output**: Write the hashed CSV, rejections and report
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use slph_core::{
    HashedPhone, PipelineOptions, PipelineOutcome, RawPhoneEntry, hash_entry, process_entries,
};
use slph_ingest::{IngestOptions, PhoneTable, read_phone_table};
use slph_output::{RunReport, write_hashed_csv, write_rejections_csv, write_run_report};

use crate::types::{CheckRow, HashConfig, HashResult, OutputPaths};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load the phone column of `input`.
pub fn ingest(input: &Path, options: &IngestOptions) -> Result<PhoneTable> {
    read_phone_table(input, options).with_context(|| format!("load {}", input.display()))
}

// ============================================================================
// Stage 2: Process
// ============================================================================

/// Normalize and hash every row of the table.
pub fn process(table: &PhoneTable, options: &PipelineOptions) -> PipelineOutcome {
    process_entries(&table.entries, options)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the requested files for a processed table.
pub fn output(config: &HashConfig, outcome: &PipelineOutcome) -> Result<OutputPaths> {
    let mut paths = OutputPaths::default();

    if config.dry_run {
        info!("dry run, hashed CSV not written");
    } else {
        write_hashed_csv(&config.output, &outcome.accepted)
            .with_context(|| format!("write {}", config.output.display()))?;
        paths.hashed_csv = Some(config.output.clone());
    }

    if let Some(path) = &config.rejections {
        write_rejections_csv(path, &outcome.rejected, config.include_raw_rejections)
            .with_context(|| format!("write {}", path.display()))?;
        paths.rejections = Some(path.clone());
    }

    if let Some(path) = &config.report {
        let report = RunReport::from_outcome(
            &config.input,
            paths.hashed_csv.as_deref(),
            &config.column,
            outcome,
            config.preview_rows,
        );
        write_run_report(path, &report).with_context(|| format!("write {}", path.display()))?;
        paths.report = Some(path.clone());
    }

    Ok(paths)
}

/// Run all stages for one input file.
pub fn run_hash(config: &HashConfig) -> Result<HashResult> {
    let span = info_span!("hash", input = %config.input.display(), column = %config.column);
    let _guard = span.enter();
    let start = Instant::now();

    let ingest_options = IngestOptions::default().with_column(config.column.clone());
    let table = ingest(&config.input, &ingest_options)?;

    let pipeline_options =
        PipelineOptions::default().with_collect_rejections(config.rejections.is_some());
    let outcome = process(&table, &pipeline_options);
    info!(
        total_rows = outcome.total_rows,
        accepted = outcome.accepted_count(),
        rejected = outcome.rejected_count(),
        "rows processed"
    );

    let outputs = output(config, &outcome)?;
    info!(duration_ms = start.elapsed().as_millis(), "hash complete");

    Ok(HashResult {
        input: config.input.clone(),
        column: table.column,
        outcome,
        preview_rows: config.preview_rows,
        outputs,
    })
}

/// Normalize and hash values given directly.
pub fn check_values(values: &[String]) -> Vec<CheckRow> {
    values
        .iter()
        .map(|value| CheckRow {
            input: value.clone(),
            hash: hash_entry(&RawPhoneEntry::from(value.as_str())).map(HashedPhone::into_string),
        })
        .collect()
}
