use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use slph_cli::pipeline::{check_values, run_hash};
use slph_cli::summary::print_check;
use slph_cli::types::{HashConfig, HashResult};
use slph_ingest::{IngestError, suggest_phone_columns};
use slph_output::DEFAULT_OUTPUT_FILE;

use crate::cli::{CheckArgs, HashArgs};

pub fn hash_config(args: &HashArgs, log_data: bool) -> HashConfig {
    HashConfig {
        input: args.input.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        column: args.column.clone(),
        preview_rows: args.preview,
        rejections: args.rejections.clone(),
        report: args.report.clone(),
        dry_run: args.dry_run,
        include_raw_rejections: log_data,
    }
}

pub fn run_hash_command(args: &HashArgs, log_data: bool) -> Result<HashResult> {
    let config = hash_config(args, log_data);
    if same_file(&config.output, &config.input) {
        bail!("output {} would overwrite the input file", config.output.display());
    }
    debug!(?config, "hash config");
    run_hash(&config)
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    print_check(&check_values(&args.values));
    Ok(())
}

/// True when both paths name the same file, after resolving `.` and `..`
/// segments and symlinks for whichever parts exist.
fn same_file(a: &Path, b: &Path) -> bool {
    resolve_path(a) == resolve_path(b)
}

fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    // The output usually does not exist yet; resolve its directory instead.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Hint for errors the user can fix by renaming a column.
pub fn error_hint(error: &anyhow::Error) -> Option<String> {
    match error.downcast_ref::<IngestError>()? {
        IngestError::MissingPhoneColumn {
            column, available, ..
        } => {
            let similar = suggest_phone_columns(available);
            if similar.is_empty() {
                Some(format!(
                    "available columns: {}; rename the phone column to '{column}' or pass --column",
                    available.join(", ")
                ))
            } else {
                Some(format!(
                    "similar columns: {}; pass --column to use one of them",
                    similar.join(", ")
                ))
            }
        }
        _ => None,
    }
}
