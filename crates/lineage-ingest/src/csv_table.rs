//! Headerless CSV reading.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// Decodes a cell lossily (invalid UTF-8 becomes U+FFFD) and drops a leading
/// byte order mark.
fn clean_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_start_matches('\u{feff}')
        .to_string()
}

/// Reads every record of a headerless delimited file.
///
/// Rows may have different lengths; short rows are not padded since missing
/// trailing cells and empty cells are equivalent downstream.
pub fn read_csv_table(path: &Path, delimiter: u8) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(clean_cell).collect());
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "read csv table");
    Ok(RawTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(clean_cell("\u{feff}root".as_bytes()), "root");
        assert_eq!(clean_cell(b" root "), " root ");
    }

    #[test]
    fn replaces_invalid_utf8() {
        assert_eq!(clean_cell(b"Jos\xe9"), "Jos\u{fffd}");
    }
}
