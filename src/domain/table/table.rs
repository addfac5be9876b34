// ============================================================
// TABLE
// ============================================================
// In-memory tabular structure: the unit of work for one uploaded file

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::error::{AppError, Result};

use super::{CellValue, Column};

/// An ordered sequence of named columns sharing one row count
///
/// Invariants: every column has exactly `row_count` values and column
/// names are unique. Both are enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns, taking the row count from the first one
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.len()).unwrap_or(0);
        Self::with_row_count(columns, row_count)
    }

    /// Build a table with an explicit row count
    ///
    /// The explicit count is what lets a zero-column projection still
    /// report how many rows it covers.
    pub fn with_row_count(columns: Vec<Column>, row_count: usize) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate column name: {}",
                    column.name
                )));
            }
            if column.len() != row_count {
                return Err(AppError::ValidationError(format!(
                    "Column {} has {} values, expected {}",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Mutable access to the column list, for in-place cleaning
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// One row of cell values in column order
    pub fn row(&self, index: usize) -> Vec<&CellValue> {
        self.columns.iter().map(|c| &c.values[index]).collect()
    }

    /// One row rendered as display strings, for previews
    pub fn row_display(&self, index: usize) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.values[index].to_field())
            .collect()
    }

    /// Keep only the rows marked true, preserving order
    pub fn retain_rows(&mut self, keep: &[bool]) {
        for column in &mut self.columns {
            let mut it = keep.iter();
            column.values.retain(|_| *it.next().unwrap_or(&false));
        }
        self.row_count = keep.iter().filter(|&&k| k).count();
    }
}
