// ============================================================
// SWEEP PIPELINE USE CASE
// ============================================================
// Orchestrate the per-file run: parse, clean, project, chart, export

use tracing::{info, warn};

use crate::application::use_cases::{chart, cleaning, conversion, projection};
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline::{BatchEntry, FileDetails, FileOutcome, PipelineConfig};
use crate::domain::table::Table;
use crate::domain::upload::UploadedFile;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ingest;

/// The per-file cleaning and conversion pipeline
///
/// Stateless across files: each run is a pure function of the uploaded
/// bytes and the stage toggles.
pub struct SweepPipeline {
    config: AppConfig,
}

impl SweepPipeline {
    /// Create a new pipeline with the given runtime configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AppConfig::default())
    }

    /// Parse one upload, enforcing the size ceiling first
    fn parse(&self, file: &UploadedFile) -> Result<Table> {
        if file.size_bytes() > self.config.max_upload_bytes {
            return Err(AppError::ValidationError(format!(
                "File {} is {} bytes, above the {} byte upload limit",
                file.name,
                file.size_bytes(),
                self.config.max_upload_bytes
            )));
        }
        ingest::parse_upload(file)
    }

    /// Parse an upload and return its details without running any stage
    pub fn preview(&self, file: &UploadedFile) -> Result<FileDetails> {
        let table = self.parse(file)?;
        Ok(self.details(file, &table))
    }

    fn details(&self, file: &UploadedFile, table: &Table) -> FileDetails {
        let preview_count = table.row_count().min(self.config.preview_rows);
        FileDetails {
            name: file.name.clone(),
            size_bytes: file.size_bytes(),
            row_count: table.row_count(),
            column_names: table.column_names(),
            preview: (0..preview_count).map(|i| table.row_display(i)).collect(),
        }
    }

    /// Run the full pipeline for one file
    ///
    /// Stage order is fixed: parse, dedupe, fill missing, project, chart
    /// selection, export. Every stage after parsing is optional; skipping
    /// one leaves the table unchanged.
    pub fn run(&self, file: &UploadedFile, config: &PipelineConfig) -> Result<FileOutcome> {
        let mut table = self.parse(file)?;
        let details = self.details(file, &table);

        let dedupe = config.dedupe.then(|| cleaning::dedupe(&mut table));
        let fill = config.fill_missing.then(|| cleaning::fill_missing(&mut table));

        let mut projected_columns = None;
        if let Some(requested) = &config.columns {
            table = projection::project(&table, requested)?;
            projected_columns = Some(table.column_names());
        }

        let chart = config.show_chart.then(|| chart::select_chart_columns(&table));

        let artifact = match config.target_format {
            Some(target) => Some(conversion::export_table(&table, &file.name, target)?),
            None => None,
        };

        info!(
            file = %file.name,
            rows = table.row_count(),
            exported = artifact.is_some(),
            "Pipeline run complete"
        );

        Ok(FileOutcome {
            details,
            dedupe,
            fill,
            projected_columns,
            chart,
            artifact,
            final_row_count: table.row_count(),
        })
    }

    /// Run the pipeline over a batch of uploads
    ///
    /// Files are processed independently; a failure in one file is
    /// recorded in its entry and the rest of the batch continues. An
    /// empty batch yields an empty result list.
    pub fn run_batch(&self, files: &[UploadedFile], config: &PipelineConfig) -> Vec<BatchEntry> {
        files
            .iter()
            .map(|file| {
                let result = self.run(file, config);
                if let Err(err) = &result {
                    warn!(file = %file.name, error = %err, "Skipping file");
                }
                BatchEntry {
                    file_name: file.name.clone(),
                    result,
                }
            })
            .collect()
    }
}
