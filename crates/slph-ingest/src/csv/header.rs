//! CSV header row reading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Strips a UTF-8 byte order mark from a header name.
pub fn normalize_header(value: &str) -> &str {
    value.trim_start_matches('\u{feff}')
}

/// Reads the column names of the header row.
///
/// Names are kept verbatim apart from a leading byte order mark; the phone
/// column must match exactly.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;
    let headers = reader.headers().map_err(|e| csv_error(path, &e))?;

    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(headers
        .iter()
        .map(|name| normalize_header(name).to_string())
        .collect())
}

fn csv_error(path: &Path, error: &::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_headers() {
        let file = create_temp_csv("name,phone\nA,0712345678\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["name", "phone"]);
    }

    #[test]
    fn test_read_headers_with_bom() {
        let file = create_temp_csv("\u{feff}phone,name\n0712345678,A\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["phone", "name"]);
    }

    #[test]
    fn test_read_headers_quoted() {
        let file = create_temp_csv("\"full, name\",\"phone\"\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["full, name", "phone"]);
    }

    #[test]
    fn test_read_headers_untrimmed() {
        let file = create_temp_csv(" phone ,name\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers[0], " phone ");
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_headers(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
