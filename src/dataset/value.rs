//! Cell values.

use serde::{Deserialize, Serialize};

/// A single cell value in an observation.
///
/// Values are a closed tagged variant, so "is this numeric" is a total match
/// instead of a runtime type probe. `Missing` and an absent cell read the
/// same everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Missing,
}

impl CellValue {
    /// The numeric content of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the cell holds a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Whether the cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_owned())
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Boolean(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::Text("2.5".into()).as_number(), None);
        assert_eq!(CellValue::Boolean(true).as_number(), None);
        assert_eq!(CellValue::Missing.as_number(), None);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(CellValue::from(1.0), CellValue::Number(1.0));
        assert_eq!(CellValue::from("a"), CellValue::Text("a".into()));
        assert_eq!(CellValue::from(false), CellValue::Boolean(false));
    }
}
