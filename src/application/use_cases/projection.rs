// ============================================================
// PROJECTION USE CASE
// ============================================================
// Restrict a table to an ordered subset of its columns

use std::collections::HashSet;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// Produce a new table with exactly the requested columns, in request order
///
/// Duplicate names in the request collapse to their first occurrence. All
/// rows are preserved; an empty request yields a zero-column table that
/// still reports the original row count. An unknown name fails with
/// `UnknownColumn` and leaves the input table untouched.
pub fn project(table: &Table, requested: &[String]) -> Result<Table> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for name in requested {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let column = table
            .column(name)
            .ok_or_else(|| AppError::UnknownColumn(name.clone()))?;
        columns.push(column.clone());
    }

    Table::with_row_count(columns, table.row_count())
}
