//! Design-matrix extraction and precondition checks.

use faer::{Col, Mat};

use crate::dataset::{CellValue, Dataset, Variable, VariableId};
use crate::error::{AnalysisError, AnalysisResult};

/// Dense response vector and design matrix extracted from a dataset.
#[derive(Debug)]
pub(crate) struct Design {
    /// `n × k` matrix of independent values, columns in call order. No
    /// intercept column; the solver prepends it.
    pub x: Mat<f64>,
    /// `n × 1` response vector.
    pub y: Col<f64>,
}

/// Validate the variable selection and extract dense matrices.
///
/// Rows are taken in ascending observation-index order. Every required cell
/// must hold a number; the first missing or non-numeric cell fails the whole
/// extraction naming its observation index and variable.
pub(crate) fn build_design(
    dataset: &Dataset,
    dependent: &str,
    independents: &[&str],
) -> AnalysisResult<Design> {
    if independents.is_empty() {
        return Err(AnalysisError::NoPredictors);
    }

    let dep_id = require_numeric(dataset, dependent)?;
    let indep_ids: Vec<VariableId> = independents
        .iter()
        .map(|name| require_numeric(dataset, name))
        .collect::<AnalysisResult<_>>()?;

    let n = dataset.observation_count();
    let k = independents.len();
    if n <= k {
        return Err(AnalysisError::InsufficientObservations {
            needed: k + 1,
            got: n,
            predictors: k,
        });
    }

    let mut x = Mat::zeros(n, k);
    let mut y = Col::zeros(n);

    for (row, (obs_index, obs)) in dataset.observations().enumerate() {
        y[row] = numeric_cell(obs.get(dep_id), obs_index, dependent)?;
        for (j, id) in indep_ids.iter().enumerate() {
            x[(row, j)] = numeric_cell(obs.get(*id), obs_index, independents[j])?;
        }
    }

    Ok(Design { x, y })
}

/// Resolve a variable name, requiring a regression-eligible kind.
fn require_numeric(dataset: &Dataset, name: &str) -> AnalysisResult<VariableId> {
    let variable = dataset
        .variable_by_name(name)
        .ok_or_else(|| AnalysisError::VariableNotFound {
            name: name.to_owned(),
        })?;
    if !variable.kind().is_numeric() {
        return Err(AnalysisError::NotNumeric {
            name: name.to_owned(),
            kind: variable.kind(),
        });
    }
    Ok(variable.id())
}

fn numeric_cell(
    cell: Option<&CellValue>,
    observation: u32,
    variable: &str,
) -> AnalysisResult<f64> {
    match cell {
        None | Some(CellValue::Missing) => Err(AnalysisError::MissingValue {
            observation,
            variable: variable.to_owned(),
        }),
        Some(value) => value
            .as_number()
            .ok_or_else(|| AnalysisError::NonNumericValue {
                observation,
                variable: variable.to_owned(),
            }),
    }
}
