//! Row pipeline: normalize, drop rejected rows, hash survivors.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::hash::hash_canonical;
use crate::model::{HashedPhone, HashedRow, Normalization, RawPhoneEntry, RejectedRow};
use crate::normalize::normalize;

/// Options controlling how rows are collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Keep rejected rows for diagnostics instead of dropping them silently.
    pub collect_rejections: bool,
}

impl PipelineOptions {
    #[must_use]
    pub fn with_collect_rejections(mut self, enable: bool) -> Self {
        self.collect_rejections = enable;
        self
    }
}

/// Result of running the pipeline over a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutcome {
    /// Number of input rows seen.
    pub total_rows: usize,
    /// Surviving rows in input order; duplicates are kept.
    pub accepted: Vec<HashedRow>,
    /// Dropped rows, empty unless [`PipelineOptions::collect_rejections`] is set.
    pub rejected: Vec<RejectedRow>,
}

impl PipelineOutcome {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Number of dropped rows, whether or not they were collected.
    pub fn rejected_count(&self) -> usize {
        self.total_rows - self.accepted.len()
    }

    pub fn hashes(&self) -> impl Iterator<Item = &HashedPhone> {
        self.accepted.iter().map(|row| &row.hash)
    }

    pub fn unique_hash_count(&self) -> usize {
        self.hashes().collect::<BTreeSet<_>>().len()
    }

    /// First `limit` surviving rows.
    pub fn preview(&self, limit: usize) -> &[HashedRow] {
        &self.accepted[..limit.min(self.accepted.len())]
    }
}

/// Normalize and hash a single entry; `None` when the entry is rejected.
pub fn hash_entry(raw: &RawPhoneEntry) -> Option<HashedPhone> {
    match normalize(raw) {
        Normalization::Accepted(phone) => Some(hash_canonical(&phone)),
        Normalization::Rejected => None,
    }
}

/// Run every entry through the normalizer and hasher, preserving row order.
pub fn process_entries(entries: &[RawPhoneEntry], options: &PipelineOptions) -> PipelineOutcome {
    let mut outcome = PipelineOutcome {
        total_rows: entries.len(),
        ..PipelineOutcome::default()
    };
    for (row, raw) in entries.iter().enumerate() {
        match normalize(raw) {
            Normalization::Accepted(phone) => {
                outcome.accepted.push(HashedRow {
                    row,
                    hash: hash_canonical(&phone),
                });
            }
            Normalization::Rejected => {
                trace!(row, "row rejected");
                if options.collect_rejections {
                    outcome.rejected.push(RejectedRow {
                        row,
                        raw: raw.clone(),
                    });
                }
            }
        }
    }
    debug!(
        total_rows = outcome.total_rows,
        accepted = outcome.accepted_count(),
        rejected = outcome.rejected_count(),
        "pipeline complete"
    );
    outcome
}
