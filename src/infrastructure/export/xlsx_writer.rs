// ============================================================
// XLSX WRITER
// ============================================================
// Serialize a table to a single-worksheet workbook with typed cells

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Table};

/// XLSX workbook writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Create a new XLSX writer
    pub fn new() -> Self {
        Self
    }

    /// Serialize the table into a fresh byte buffer
    pub fn write(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, column) in table.columns().iter().enumerate() {
            let col = col as u16;
            worksheet
                .write_string(0, col, column.name.as_str())
                .map_err(export_err)?;

            for (row, value) in column.values.iter().enumerate() {
                let row = (row + 1) as u32;
                match value {
                    CellValue::Text(s) => {
                        worksheet
                            .write_string(row, col, s.as_str())
                            .map_err(export_err)?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(row, col, *n).map_err(export_err)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(row, col, *b).map_err(export_err)?;
                    }
                    CellValue::Missing => {}
                }
            }
        }

        workbook.save_to_buffer().map_err(export_err)
    }
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn export_err(err: XlsxError) -> AppError {
    AppError::ExportError(format!("Failed to write workbook: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Column;
    use crate::infrastructure::ingest::XlsxReader;

    #[test]
    fn test_round_trip_through_reader() {
        let table = Table::new(vec![
            Column::new(
                "name",
                vec![
                    CellValue::Text("A".to_string()),
                    CellValue::Text("B".to_string()),
                ],
            ),
            Column::new(
                "score",
                vec![CellValue::Number(1.5), CellValue::Number(2.0)],
            ),
            Column::new("active", vec![CellValue::Bool(true), CellValue::Bool(false)]),
        ])
        .unwrap();

        let bytes = XlsxWriter::new().write(&table).unwrap();
        let parsed = XlsxReader::new().read(&bytes).unwrap();

        assert_eq!(parsed, table);
    }

    #[test]
    fn test_header_only_workbook() {
        let table = Table::new(vec![Column::new("a", Vec::new())]).unwrap();

        let bytes = XlsxWriter::new().write(&table).unwrap();
        let parsed = XlsxReader::new().read(&bytes).unwrap();

        assert_eq!(parsed.column_names(), vec!["a"]);
        assert_eq!(parsed.row_count(), 0);
    }
}
