// ============================================================
// CHART SELECTION USE CASE
// ============================================================
// Pick the columns the UI renders as a bar chart; rendering itself is
// the UI layer's job

use crate::domain::pipeline::{ChartColumn, ChartSelection};
use crate::domain::table::Table;

/// Select the first two numeric columns in current column order
///
/// With fewer than two numeric columns, the selection holds whatever
/// exists: one column, or none at all.
pub fn select_chart_columns(table: &Table) -> ChartSelection {
    let columns = table
        .columns()
        .iter()
        .filter(|c| c.is_numeric())
        .take(2)
        .map(|c| ChartColumn {
            name: c.name.clone(),
            values: c.values.iter().map(|v| v.as_number()).collect(),
        })
        .collect();

    ChartSelection { columns }
}
