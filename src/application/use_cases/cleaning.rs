// ============================================================
// CLEANING USE CASES
// ============================================================
// Duplicate removal and mean imputation over the tabular core

use std::collections::HashSet;

use tracing::debug;

use crate::domain::pipeline::{DedupeReport, FillReport};
use crate::domain::table::{CellValue, Table};

/// Remove rows that exactly duplicate an earlier row across all columns
///
/// Keeps the first occurrence and preserves the order of surviving rows.
/// Idempotent: once no duplicates remain, re-running removes nothing.
pub fn dedupe(table: &mut Table) -> DedupeReport {
    let rows_before = table.row_count();

    let keep: Vec<bool> = {
        let mut seen = HashSet::new();
        (0..rows_before)
            .map(|index| {
                let key: Vec<_> = table.row(index).iter().map(|v| v.key()).collect();
                seen.insert(key)
            })
            .collect()
    };

    table.retain_rows(&keep);
    let rows_removed = rows_before - table.row_count();
    debug!(rows_before, rows_removed, "Deduplicated table");

    DedupeReport {
        rows_before,
        rows_removed,
    }
}

/// Fill missing values in numeric columns with the per-column mean
///
/// The mean is computed once over the non-missing values at the time of the
/// call. Non-numeric columns are untouched; an all-missing column has no
/// defined mean and is left as-is, reported under `skipped_columns`.
/// Idempotent: a column without missing values is unchanged.
pub fn fill_missing(table: &mut Table) -> FillReport {
    let mut cells_filled = 0;
    let mut filled_columns = Vec::new();
    let mut skipped_columns = Vec::new();

    for column in table.columns_mut() {
        if column.is_all_missing() {
            skipped_columns.push(column.name.clone());
            continue;
        }
        if !column.is_numeric() {
            continue;
        }

        let Some(mean) = column.mean() else { continue };

        let mut filled = 0;
        for value in &mut column.values {
            if value.is_missing() {
                *value = CellValue::Number(mean);
                filled += 1;
            }
        }

        if filled > 0 {
            cells_filled += filled;
            filled_columns.push(column.name.clone());
        }
    }

    debug!(cells_filled, "Filled missing numeric values");

    FillReport {
        cells_filled,
        filled_columns,
        skipped_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Column;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new(
                "name",
                vec![
                    CellValue::Text("A".to_string()),
                    CellValue::Text("A".to_string()),
                    CellValue::Text("B".to_string()),
                ],
            ),
            Column::new(
                "score",
                vec![
                    CellValue::Number(1.0),
                    CellValue::Number(1.0),
                    CellValue::Missing,
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut table = sample_table();
        let report = dedupe(&mut table);

        assert_eq!(report.rows_before, 3);
        assert_eq!(report.rows_removed, 1);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("name").unwrap().values,
            vec![
                CellValue::Text("A".to_string()),
                CellValue::Text("B".to_string()),
            ]
        );
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let mut table = sample_table();
        dedupe(&mut table);
        let once = table.clone();

        let report = dedupe(&mut table);
        assert_eq!(report.rows_removed, 0);
        assert_eq!(table, once);
    }

    #[test]
    fn test_rows_differing_in_missing_are_kept() {
        let mut table = Table::new(vec![Column::new(
            "score",
            vec![CellValue::Number(1.0), CellValue::Missing],
        )])
        .unwrap();

        let report = dedupe(&mut table);
        assert_eq!(report.rows_removed, 0);
    }

    #[test]
    fn test_fill_missing_uses_column_mean() {
        let mut table = Table::new(vec![
            Column::new(
                "score",
                vec![
                    CellValue::Number(1.0),
                    CellValue::Number(3.0),
                    CellValue::Missing,
                ],
            ),
            Column::new(
                "label",
                vec![
                    CellValue::Text("x".to_string()),
                    CellValue::Missing,
                    CellValue::Text("y".to_string()),
                ],
            ),
        ])
        .unwrap();

        let report = fill_missing(&mut table);

        assert_eq!(report.cells_filled, 1);
        assert_eq!(report.filled_columns, vec!["score"]);
        assert_eq!(
            table.column("score").unwrap().values,
            vec![
                CellValue::Number(1.0),
                CellValue::Number(3.0),
                CellValue::Number(2.0),
            ]
        );
        // Non-numeric columns are untouched
        assert_eq!(
            table.column("label").unwrap().values[1],
            CellValue::Missing
        );
    }

    #[test]
    fn test_fill_missing_preserves_observed_values() {
        let mut table = Table::new(vec![Column::new(
            "score",
            vec![
                CellValue::Number(2.0),
                CellValue::Missing,
                CellValue::Number(4.0),
            ],
        )])
        .unwrap();

        fill_missing(&mut table);

        let column = table.column("score").unwrap();
        assert_eq!(column.values[0], CellValue::Number(2.0));
        assert_eq!(column.values[2], CellValue::Number(4.0));
        assert_eq!(column.missing_count(), 0);
    }

    #[test]
    fn test_fill_missing_is_idempotent() {
        let mut table = sample_table();
        fill_missing(&mut table);
        let once = table.clone();

        let report = fill_missing(&mut table);
        assert_eq!(report.cells_filled, 0);
        assert_eq!(table, once);
    }

    #[test]
    fn test_all_missing_column_is_skipped() {
        let mut table = Table::new(vec![Column::new(
            "empty",
            vec![CellValue::Missing, CellValue::Missing],
        )])
        .unwrap();

        let report = fill_missing(&mut table);

        assert_eq!(report.cells_filled, 0);
        assert_eq!(report.skipped_columns, vec!["empty"]);
        assert!(table.column("empty").unwrap().is_all_missing());
    }

    #[test]
    fn test_table_without_numeric_columns_is_untouched() {
        let mut table = Table::new(vec![Column::new(
            "name",
            vec![CellValue::Text("A".to_string()), CellValue::Missing],
        )])
        .unwrap();
        let before = table.clone();

        let report = fill_missing(&mut table);

        assert_eq!(report.cells_filled, 0);
        assert_eq!(table, before);
    }
}
