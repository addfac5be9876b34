// ============================================================
// EXPORT INFRASTRUCTURE LAYER
// ============================================================
// Serialization of the tabular core back into file bytes

mod csv_writer;
mod xlsx_writer;

pub use csv_writer::CsvWriter;
pub use xlsx_writer::XlsxWriter;

use crate::domain::error::Result;
use crate::domain::table::Table;
use crate::domain::upload::FileFormat;

/// Serialize a table into bytes of the target format
pub fn serialize_table(table: &Table, format: FileFormat) -> Result<Vec<u8>> {
    match format {
        FileFormat::Csv => CsvWriter::new().write(table),
        FileFormat::Xlsx => XlsxWriter::new().write(table),
    }
}
