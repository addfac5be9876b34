// ============================================================
// CELL VALUE
// ============================================================
// A single typed cell in a table column

use serde::{Deserialize, Serialize};

/// A single cell value after type coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Free-form text
    Text(String),

    /// Numeric value (integers are widened to f64)
    Number(f64),

    /// Boolean value
    Bool(bool),

    /// Empty or blank cell
    Missing,
}

impl CellValue {
    /// Coerce a raw text field into a typed cell value
    ///
    /// Coercion rules: blank -> Missing, f64-parsable -> Number,
    /// "true"/"false" (case-insensitive) -> Bool, anything else -> Text
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::Text(trimmed.to_string())
    }

    /// Whether this cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric value, if this cell holds one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Render the cell the way it is written to a CSV field
    ///
    /// Numbers use Rust's shortest round-tripping form, so 1.0 prints as "1"
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Missing => String::new(),
        }
    }

    /// Hashable identity key used for exact-duplicate row detection
    pub fn key(&self) -> CellKey<'_> {
        match self {
            CellValue::Text(s) => CellKey::Text(s),
            // Normalize -0.0 to 0.0 so equal numbers share a key
            CellValue::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                CellKey::Number(n.to_bits())
            }
            CellValue::Bool(b) => CellKey::Bool(*b),
            CellValue::Missing => CellKey::Missing,
        }
    }
}

/// Borrowed, hashable view of a cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKey<'a> {
    Text(&'a str),
    Number(u64),
    Bool(bool),
    Missing,
}
