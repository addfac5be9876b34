// ============================================================
// PIPELINE CONFIGURATION & REPORTS
// ============================================================
// The per-file stage toggles and the results each stage reports back

use serde::{Deserialize, Serialize};

use super::upload::{ExportArtifact, FileFormat};

/// Stage toggles for one per-file pipeline run
///
/// Every optional stage is off by default; a skipped stage leaves the
/// table unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Remove exact-duplicate rows, keeping the first occurrence
    #[serde(default)]
    pub dedupe: bool,

    /// Fill missing numeric values with the per-column mean
    #[serde(default)]
    pub fill_missing: bool,

    /// Restrict the table to these columns, in this order (None = keep all)
    #[serde(default)]
    pub columns: Option<Vec<String>>,

    /// Select the first two numeric columns for the UI's bar chart
    #[serde(default)]
    pub show_chart: bool,

    /// Serialize the result to this format (None = no export)
    #[serde(default)]
    pub target_format: Option<FileFormat>,
}

/// Result of the duplicate-removal stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupeReport {
    /// Row count before deduplication
    pub rows_before: usize,

    /// Number of duplicate rows removed
    pub rows_removed: usize,
}

/// Result of the mean-imputation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillReport {
    /// Total number of missing cells replaced
    pub cells_filled: usize,

    /// Numeric columns that had missing values filled
    pub filled_columns: Vec<String>,

    /// All-missing columns left untouched because their mean is undefined
    pub skipped_columns: Vec<String>,
}

/// One numeric column selected for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColumn {
    /// Column name
    pub name: String,

    /// Numeric values in row order; missing cells become gaps
    pub values: Vec<Option<f64>>,
}

/// The numeric columns the UI should render as a bar chart
///
/// Holds the first two numeric columns in current column order, or fewer
/// when fewer exist. Rendering itself is the UI's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSelection {
    pub columns: Vec<ChartColumn>,
}

/// Details of a parsed upload, shown to the user before cleaning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDetails {
    /// Original filename
    pub name: String,

    /// Upload size in bytes
    pub size_bytes: usize,

    /// Number of data rows (header excluded)
    pub row_count: usize,

    /// Column names in order
    pub column_names: Vec<String>,

    /// First rows rendered as display strings
    pub preview: Vec<Vec<String>>,
}

/// Outcome of one file within a batch run
#[derive(Debug)]
pub struct BatchEntry {
    /// Original filename, echoed even when the file failed to parse
    pub file_name: String,

    /// The per-file outcome, or the error that made this file skip
    pub result: crate::domain::error::Result<FileOutcome>,
}

/// Everything one pipeline run produced for a single file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Details of the file as parsed, before any cleaning
    pub details: FileDetails,

    /// Dedupe stage report, when the stage ran
    pub dedupe: Option<DedupeReport>,

    /// Fill-missing stage report, when the stage ran
    pub fill: Option<FillReport>,

    /// Column names after projection, when the stage ran
    pub projected_columns: Option<Vec<String>>,

    /// Chart selection, when requested
    pub chart: Option<ChartSelection>,

    /// Export artifact, when a target format was requested
    pub artifact: Option<ExportArtifact>,

    /// Row count of the final table
    pub final_row_count: usize,
}
