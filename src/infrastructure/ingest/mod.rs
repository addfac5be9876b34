// ============================================================
// INGESTION INFRASTRUCTURE LAYER
// ============================================================
// File-format detection and parsing into the tabular core

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::CsvReader;
pub use xlsx_reader::XlsxReader;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;
use crate::domain::upload::{FileFormat, UploadedFile};

/// Parse an uploaded file by its filename extension
///
/// Unrecognized extensions fail with `UnsupportedFormat`; the caller skips
/// the file and continues with the rest of the batch.
pub fn parse_upload(file: &UploadedFile) -> Result<Table> {
    match FileFormat::from_filename(&file.name) {
        Some(FileFormat::Csv) => CsvReader::new().read(&file.content),
        Some(FileFormat::Xlsx) => XlsxReader::new().read(&file.content),
        None => Err(AppError::UnsupportedFormat(file.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let file = UploadedFile::new("data.txt", b"a,b\n1,2".to_vec());
        let err = parse_upload(&file).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_csv_extension_is_case_insensitive() {
        let file = UploadedFile::new("DATA.CSV", b"a,b\n1,2".to_vec());
        let table = parse_upload(&file).unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
