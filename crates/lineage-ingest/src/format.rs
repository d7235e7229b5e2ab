//! Table format detection and dispatch.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::RawTable;
use crate::workbook::read_workbook_table;

/// Source formats a genealogy table can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// Comma separated text.
    Csv,
    /// Tab separated text.
    Tsv,
    /// Any workbook `calamine` can open (xlsx, xlsm, xlsb, xls, ods).
    Workbook,
}

impl TableFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Options for [`read_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Forces a format instead of detecting it from the extension.
    #[serde(default)]
    pub format: Option<TableFormat>,
    /// Worksheet to read from a workbook; the first sheet when unset.
    #[serde(default)]
    pub sheet: Option<String>,
}

impl ReadOptions {
    #[must_use]
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

/// Reads a genealogy table, picking the reader from the options or extension.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<RawTable> {
    let format = match options.format {
        Some(format) => format,
        None => TableFormat::from_path(path)?,
    };
    match format {
        TableFormat::Csv => read_csv_table(path, b','),
        TableFormat::Tsv => read_csv_table(path, b'\t'),
        TableFormat::Workbook => read_workbook_table(path, options.sheet.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            TableFormat::from_path(Path::new("family.CSV")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("family.tsv")).unwrap(),
            TableFormat::Tsv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("geneology.xlsx")).unwrap(),
            TableFormat::Workbook
        );
        assert!(matches!(
            TableFormat::from_path(Path::new("family.json")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(TableFormat::from_path(Path::new("family")).is_err());
    }
}
