//! Spreadsheet workbook reading via `calamine`.
//!
//! Only cell values are read; formulas, styles and merged ranges are ignored.

use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::table::{RawRow, RawTable};

/// Reads one worksheet (the first unless `sheet` names another) as text.
pub fn read_workbook_table(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoWorksheets {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // `Range` rows are relative to `range.start()`; pad back to sheet coordinates
    // so column 0 is always the sheet's first column.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<RawRow> = vec![Vec::new(); start_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col as usize];
        row.extend(cells.iter().map(cell_to_text));
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = rows.len(),
        "read workbook table"
    );
    Ok(RawTable::new(rows))
}

/// Renders a cell as the text a person typed into it.
///
/// Integral numbers drop their fractional part so `2.0` reads as `2`. Dates
/// render as `YYYY-MM-DD HH:MM:SS`. Error cells render empty, the same as a
/// blank cell.
pub fn cell_to_text(value: &Data) -> String {
    match value {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(v) | Data::DateTimeIso(v) | Data::DurationIso(v) => v.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => format_float(*v),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(v) => format_datetime(v),
    }
}

fn format_datetime(value: &ExcelDateTime) -> String {
    if value.is_datetime()
        && let Some(datetime) = value.as_datetime()
    {
        return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    format_float(value.as_f64())
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    #[test]
    fn renders_cells_as_text() {
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_text(&Data::String("Mary".into())), "Mary");
        assert_eq!(cell_to_text(&Data::Int(7)), "7");
        assert_eq!(cell_to_text(&Data::Float(2.0)), "2");
        assert_eq!(cell_to_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_text(&Data::Bool(true)), "True");
    }

    #[test]
    fn renders_dates_as_text() {
        let date = ExcelDateTime::new(45000.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_text(&Data::DateTime(date)), "2023-03-15 00:00:00");
        let noon = ExcelDateTime::new(45000.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_text(&Data::DateTime(noon)), "2023-03-15 12:00:00");
    }

    #[test]
    fn missing_workbook_is_not_found() {
        let err = read_workbook_table(Path::new("/definitely/not/here.xlsx"), None).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
