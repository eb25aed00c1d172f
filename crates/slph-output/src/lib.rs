//! Output generation for hashed phone audiences.
//!
//! - Custom Audience CSV (`hashed_phone` column, no index, UTF-8, LF)
//! - Optional rejection CSV for diagnosing dropped rows
//! - Optional JSON run report

mod audience;
mod common;
mod error;
mod rejections;
mod report;

pub use audience::{DEFAULT_OUTPUT_FILE, HASHED_COLUMN, hashed_csv_bytes, write_hashed_csv};
pub use common::{ensure_parent_dir, write_file};
pub use error::{OutputError, Result};
pub use rejections::{rejections_csv_bytes, write_rejections_csv};
pub use report::{RunReport, write_run_report};
