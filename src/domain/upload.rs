// ============================================================
// UPLOAD & EXPORT TYPES
// ============================================================
// Value objects crossing the boundary between the UI and the pipeline

use serde::{Deserialize, Serialize};

/// One file handed over by the UI layer, consumed once per pipeline run
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as uploaded
    pub name: String,

    /// Raw byte content
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Create a new uploaded file
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Size of the uploaded content in bytes
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

/// Supported tabular file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    /// Canonical file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
        }
    }

    /// MIME type describing exported bytes of this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileFormat::Csv => "text/csv",
            FileFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Resolve a format from a filename's extension (case-insensitive)
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = match name.rfind('.') {
            Some(idx) => &name[idx + 1..],
            None => return None,
        };
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" => Some(FileFormat::Xlsx),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Xlsx => write!(f, "XLSX"),
        }
    }
}

/// A request to convert one source file into a target format
///
/// Only used to compute the output filename and MIME type.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Original filename of the source upload
    pub source_name: String,

    /// Requested output format
    pub target: FileFormat,
}

impl ConversionRequest {
    /// Create a new conversion request
    pub fn new(source_name: impl Into<String>, target: FileFormat) -> Self {
        Self {
            source_name: source_name.into(),
            target,
        }
    }

    /// Output filename: the source name with its extension replaced
    ///
    /// A source name without an extension gets the target extension appended.
    pub fn output_filename(&self) -> String {
        let stem = match self.source_name.rfind('.') {
            Some(idx) if idx > 0 => &self.source_name[..idx],
            _ => self.source_name.as_str(),
        };
        format!("{}.{}", stem, self.target.extension())
    }

    /// MIME type of the exported bytes
    pub fn mime_type(&self) -> &'static str {
        self.target.mime_type()
    }
}

/// Serialized table bytes plus download metadata, handed to the UI boundary
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Serialized table content
    pub bytes: Vec<u8>,

    /// Download filename
    pub file_name: String,

    /// Content type of `bytes`
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(FileFormat::from_filename("data.csv"), Some(FileFormat::Csv));
        assert_eq!(
            FileFormat::from_filename("Data.XLSX"),
            Some(FileFormat::Xlsx)
        );
        assert_eq!(FileFormat::from_filename("data.txt"), None);
        assert_eq!(FileFormat::from_filename("noext"), None);
    }

    #[test]
    fn test_output_filename_replaces_extension() {
        let request = ConversionRequest::new("report.xlsx", FileFormat::Csv);
        assert_eq!(request.output_filename(), "report.csv");

        let request = ConversionRequest::new("Data.XLSX", FileFormat::Csv);
        assert_eq!(request.output_filename(), "Data.csv");
    }

    #[test]
    fn test_output_filename_without_extension() {
        let request = ConversionRequest::new("noext", FileFormat::Csv);
        assert_eq!(request.output_filename(), "noext.csv");
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(FileFormat::Csv.mime_type(), "text/csv");
        assert!(FileFormat::Xlsx.mime_type().contains("spreadsheetml"));
    }
}
