//! Observations (rows).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::CellValue;
use super::variable::VariableId;

/// One row of data: a sparse mapping from variable id to cell value.
///
/// An observation has no identity of its own; it is identified by the index
/// under which its owning [`Dataset`](super::Dataset) stores it. A variable
/// absent from the map is a missing cell, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    values: BTreeMap<VariableId, CellValue>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the value for a variable.
    pub fn set(&mut self, variable: VariableId, value: CellValue) {
        self.values.insert(variable, value);
    }

    /// The value stored for a variable, if any.
    pub fn get(&self, variable: VariableId) -> Option<&CellValue> {
        self.values.get(&variable)
    }

    /// Remove the value stored for a variable.
    pub fn remove(&mut self, variable: VariableId) {
        self.values.remove(&variable);
    }

    /// Number of cells actually stored in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored `(variable id, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &CellValue)> {
        self.values.iter().map(|(id, v)| (*id, v))
    }
}
