mod app;
mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use app::run;

// Per-action entry points for UI layers that wire their own event model
pub use application::use_cases::chart::select_chart_columns;
pub use application::use_cases::cleaning::{dedupe, fill_missing};
pub use application::use_cases::conversion::export_table;
pub use application::use_cases::projection::project;
pub use application::SweepPipeline;
pub use infrastructure::ingest::parse_upload;

pub use domain::error::{AppError, Result};
pub use domain::pipeline::{
    BatchEntry, ChartColumn, ChartSelection, DedupeReport, FileDetails, FileOutcome, FillReport,
    PipelineConfig,
};
pub use domain::table::{CellValue, Column, Table};
pub use domain::upload::{ConversionRequest, ExportArtifact, FileFormat, UploadedFile};
pub use infrastructure::config::AppConfig;
