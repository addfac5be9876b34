// ============================================================
// CONVERSION USE CASE
// ============================================================
// Serialize a table for download: format dispatch, filename, MIME type

use crate::domain::error::Result;
use crate::domain::table::Table;
use crate::domain::upload::{ConversionRequest, ExportArtifact, FileFormat};
use crate::infrastructure::export::serialize_table;

/// Export a table to the target format
///
/// Allocates a fresh buffer on every call; nothing is shared between
/// export triggers. The output filename is the source name with its
/// extension replaced by the target's canonical extension.
pub fn export_table(
    table: &Table,
    source_name: &str,
    target: FileFormat,
) -> Result<ExportArtifact> {
    let request = ConversionRequest::new(source_name, target);
    let bytes = serialize_table(table, target)?;

    Ok(ExportArtifact {
        bytes,
        file_name: request.output_filename(),
        mime_type: request.mime_type().to_string(),
    })
}
