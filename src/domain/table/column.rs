// ============================================================
// COLUMN
// ============================================================
// A named, ordered sequence of cell values

use serde::{Deserialize, Serialize};

use super::CellValue;

/// A single named column of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row
    pub name: String,

    /// Cell values, one per row
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of rows in this column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this column has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether this column is numeric
    ///
    /// A column is numeric when it holds at least one number and every
    /// non-missing value is a number. An all-missing column is not numeric.
    pub fn is_numeric(&self) -> bool {
        let mut has_number = false;
        for value in &self.values {
            match value {
                CellValue::Number(_) => has_number = true,
                CellValue::Missing => {}
                _ => return false,
            }
        }
        has_number
    }

    /// Whether every value in this column is missing
    pub fn is_all_missing(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|v| v.is_missing())
    }

    /// Number of missing values
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Arithmetic mean of the non-missing numeric values
    ///
    /// Returns None when the column holds no numbers
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;

        for value in &self.values {
            if let Some(n) = value.as_number() {
                sum += n;
                count += 1;
            }
        }

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().map(|&n| CellValue::Number(n)).collect()
    }

    #[test]
    fn test_numeric_column() {
        let col = Column::new("score", numbers(&[1.0, 2.0, 3.0]));
        assert!(col.is_numeric());
        assert_eq!(col.mean(), Some(2.0));
    }

    #[test]
    fn test_numeric_with_missing() {
        let mut values = numbers(&[1.0, 3.0]);
        values.push(CellValue::Missing);
        let col = Column::new("score", values);

        assert!(col.is_numeric());
        assert_eq!(col.mean(), Some(2.0));
        assert_eq!(col.missing_count(), 1);
    }

    #[test]
    fn test_mixed_column_is_not_numeric() {
        let col = Column::new(
            "mixed",
            vec![CellValue::Number(1.0), CellValue::Text("x".to_string())],
        );
        assert!(!col.is_numeric());
    }

    #[test]
    fn test_all_missing_column() {
        let col = Column::new("empty", vec![CellValue::Missing, CellValue::Missing]);
        assert!(!col.is_numeric());
        assert!(col.is_all_missing());
        assert_eq!(col.mean(), None);
    }
}
