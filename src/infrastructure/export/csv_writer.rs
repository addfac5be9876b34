// ============================================================
// CSV WRITER
// ============================================================
// Serialize a table to CSV bytes: header row, no index column

use csv::WriterBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// CSV writer
pub struct CsvWriter {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    /// Create a new CSV writer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Serialize the table into a fresh byte buffer
    pub fn write(&self, table: &Table) -> Result<Vec<u8>> {
        // The csv crate rejects zero-field records
        if table.column_count() == 0 {
            return Ok(Vec::new());
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer
            .write_record(table.column_names())
            .map_err(|e| AppError::ExportError(format!("Failed to write CSV header: {}", e)))?;

        for index in 0..table.row_count() {
            writer.write_record(table.row_display(index)).map_err(|e| {
                AppError::ExportError(format!("Failed to write CSV row {}: {}", index + 1, e))
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::ExportError(format!("Failed to flush CSV output: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{CellValue, Column};

    #[test]
    fn test_write_with_header() {
        let table = Table::new(vec![
            Column::new(
                "name",
                vec![
                    CellValue::Text("A".to_string()),
                    CellValue::Text("B".to_string()),
                ],
            ),
            Column::new("score", vec![CellValue::Number(1.0), CellValue::Missing]),
        ])
        .unwrap();

        let bytes = CsvWriter::new().write(&table).unwrap();
        let content = String::from_utf8(bytes).unwrap();

        assert_eq!(content, "name,score\nA,1\nB,\n");
    }

    #[test]
    fn test_zero_column_table_writes_nothing() {
        let table = Table::with_row_count(Vec::new(), 3).unwrap();
        assert!(CsvWriter::new().write(&table).unwrap().is_empty());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let table = Table::new(vec![Column::new(
            "note",
            vec![CellValue::Text("a, b".to_string())],
        )])
        .unwrap();

        let bytes = CsvWriter::new().write(&table).unwrap();
        let content = String::from_utf8(bytes).unwrap();

        assert_eq!(content, "note\n\"a, b\"\n");
    }
}
