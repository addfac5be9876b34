// ============================================================
// CSV READER
// ============================================================
// Parse CSV bytes with encoding detection and error handling

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Column, Table};

/// CSV reader with encoding fallback
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV bytes into a table
    pub fn read(&self, bytes: &[u8]) -> Result<Table> {
        let content = decode_bytes(bytes);
        self.read_content(&content)
    }

    /// Parse CSV content from a string
    pub fn read_content(&self, content: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        if names.is_empty() || names.iter().all(|n| n.is_empty()) {
            return Err(AppError::ParseError(
                "CSV content has no header row".to_string(),
            ));
        }

        let mut values: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Short rows pad with Missing, extra fields beyond the header are dropped
            for (idx, column) in values.iter_mut().enumerate() {
                let raw = record.get(idx).unwrap_or("");
                column.push(CellValue::from_raw(raw));
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

/// Decode raw bytes: strict UTF-8 first, Windows-1252 fallback
fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["name", "age", "city"]);
        assert_eq!(
            table.column("age").unwrap().values,
            vec![CellValue::Number(30.0), CellValue::Number(25.0)]
        );
    }

    #[test]
    fn test_blank_cells_become_missing() {
        let content = "name,score\nA,1\nB,";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(
            table.column("score").unwrap().values,
            vec![CellValue::Number(1.0), CellValue::Missing]
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let content = "a,b,c\n1,2";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column("c").unwrap().values, vec![CellValue::Missing]);
    }

    #[test]
    fn test_duplicate_headers_rejected() {
        let content = "a,a\n1,2";
        assert!(CsvReader::new().read_content(content).is_err());
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(CsvReader::new().read_content("").is_err());
    }

    #[test]
    fn test_semicolon_delimiter() {
        let content = "a;b\n1;2";
        let table = CsvReader::new()
            .with_delimiter(b';')
            .read_content(content)
            .unwrap();

        assert_eq!(table.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "café" with a Latin-1 encoded é
        let bytes = b"name\ncaf\xe9";
        let table = CsvReader::new().read(bytes).unwrap();

        assert_eq!(
            table.column("name").unwrap().values,
            vec![CellValue::Text("café".to_string())]
        );
    }
}
