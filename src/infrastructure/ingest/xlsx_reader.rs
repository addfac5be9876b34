// ============================================================
// XLSX READER
// ============================================================
// Parse spreadsheet bytes via calamine: first worksheet, header row first

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Column, Table};

/// XLSX workbook reader
pub struct XlsxReader;

impl XlsxReader {
    /// Create a new XLSX reader
    pub fn new() -> Self {
        Self
    }

    /// Parse XLSX bytes into a table
    pub fn read(&self, bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| AppError::ParseError(format!("Failed to open workbook: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read worksheet range: {}", e)))?;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| AppError::ParseError("Worksheet has no header row".to_string()))?;

        let mut names: Vec<String> = header.iter().map(header_name).collect();
        // Drop trailing unnamed columns left behind by the used range
        while names.last().map(|n| n.is_empty()).unwrap_or(false) {
            names.pop();
        }
        if names.is_empty() {
            return Err(AppError::ParseError(
                "Worksheet has no named columns".to_string(),
            ));
        }

        let empty = Data::Empty;
        let mut values: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];
        for row in rows {
            for (idx, column) in values.iter_mut().enumerate() {
                let cell = row.get(idx).unwrap_or(&empty);
                column.push(convert_cell(cell));
            }
        }

        let columns = names
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect();

        Table::new(columns)
    }
}

impl Default for XlsxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a header cell as a column name
fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{}", other),
    }
}

/// Map a worksheet cell onto a typed cell value
///
/// Date/time cells are carried as their Excel serial number, ISO
/// date/duration text is kept as text, error cells become missing.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Missing,
    }
}
