//! The dataset: an ordered list of variables plus sparse indexed rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

use super::observation::Observation;
use super::value::CellValue;
use super::variable::{Variable, VariableId, VariableKind};

/// A named table: typed variables (columns) and sparse observations (rows).
///
/// Variables keep insertion order, which is the column display order, and
/// names are unique within a dataset. Observations are stored under integer
/// indices; deleting a row leaves its index permanently vacant. Iteration is
/// always in ascending index order, so fits over the same dataset are
/// reproducible.
///
/// `Dataset` owns all of its data, so `clone()` is a fully independent deep
/// copy: mutating the clone (e.g. adding a derived column) never affects the
/// original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    id: Option<i64>,
    name: String,
    variables: Vec<Variable>,
    observations: BTreeMap<u32, Observation>,
    next_variable_id: u32,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            variables: Vec::new(),
            observations: BTreeMap::new(),
            next_variable_id: 0,
        }
    }

    /// Create a dataset with a persistence-layer id.
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        let mut ds = Self::new(name);
        ds.id = Some(id);
        ds
    }

    /// Persistence-layer id, if the dataset has been stored.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a variable to the end of the column order.
    ///
    /// If a variable with the same name already exists this is a no-op and
    /// the existing variable's id is returned.
    pub fn add_variable(&mut self, name: impl Into<String>, kind: VariableKind) -> VariableId {
        let name = name.into();
        if let Some(existing) = self.variable_by_name(&name) {
            return existing.id();
        }
        let id = VariableId(self.next_variable_id);
        self.next_variable_id += 1;
        self.variables.push(Variable::new(id, name, kind));
        id
    }

    /// Remove a variable by name, cascading the removal of its cells from
    /// every observation. Silent no-op if the name does not exist.
    pub fn remove_variable(&mut self, name: &str) {
        let Some(id) = self.variable_by_name(name).map(Variable::id) else {
            return;
        };
        self.variables.retain(|v| v.id() != id);
        for obs in self.observations.values_mut() {
            obs.remove(id);
        }
    }

    /// Append an observation under the next available index and return it.
    pub fn add_observation(&mut self, observation: Observation) -> u32 {
        let index = self.next_observation_index();
        self.observations.insert(index, observation);
        index
    }

    /// Delete the row at `index`. Remaining rows keep their indices.
    pub fn remove_observation(&mut self, index: u32) {
        self.observations.remove(&index);
    }

    /// The index an appended observation would receive: highest current
    /// index + 1, or 0 when the dataset has no observations.
    pub fn next_observation_index(&self) -> u32 {
        self.observations
            .keys()
            .next_back()
            .map_or(0, |max| max + 1)
    }

    /// Look up a variable by name. Linear scan over the column order.
    pub fn variable_by_name(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    /// The value of a cell, or `None` when the row or the cell is absent.
    pub fn value(&self, obs_index: u32, variable_name: &str) -> Option<&CellValue> {
        let id = self.variable_by_name(variable_name)?.id();
        self.observations.get(&obs_index)?.get(id)
    }

    /// Set a cell value, creating the observation if `obs_index` is new.
    ///
    /// The variable must already exist; unknown names are a configuration
    /// error, never an implicit column.
    pub fn set_value(
        &mut self,
        obs_index: u32,
        variable_name: &str,
        value: CellValue,
    ) -> AnalysisResult<()> {
        let id = self
            .variable_by_name(variable_name)
            .map(Variable::id)
            .ok_or_else(|| AnalysisError::VariableNotFound {
                name: variable_name.to_owned(),
            })?;
        self.observations.entry(obs_index).or_default().set(id, value);
        Ok(())
    }

    /// Set a cell by variable id, creating the observation if needed. The id
    /// must come from this dataset (or a clone of it).
    pub(crate) fn set_cell(&mut self, obs_index: u32, variable: VariableId, value: CellValue) {
        self.observations
            .entry(obs_index)
            .or_default()
            .set(variable, value);
    }

    /// Variables in column display order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The observation stored under `index`, if any.
    pub fn observation(&self, index: u32) -> Option<&Observation> {
        self.observations.get(&index)
    }

    /// Iterate over `(index, observation)` pairs in ascending index order.
    pub fn observations(&self) -> impl Iterator<Item = (u32, &Observation)> {
        self.observations.iter().map(|(i, o)| (*i, o))
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}
