//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_header, read_csv_headers};
pub use reader::{MAX_CSV_FILE_SIZE, check_file_size, read_csv_frame, validate_encoding};
