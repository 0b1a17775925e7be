//! Mediation and moderation analyses built on the regression engine.

mod mediation;
mod moderation;

pub use mediation::{analyze_mediation, MediationReport};
pub use moderation::{
    analyze_moderation, ModerationReport, ModerationVerdict, MODERATION_THRESHOLD,
};

use crate::dataset::{Dataset, VariableId};
use crate::error::{AnalysisError, AnalysisResult};
use crate::regression::RegressionResult;

/// Reject selections that repeat a variable or name one that is absent or
/// not numeric-kinded. Runs before any regression. Returns the resolved ids
/// in selection order.
fn check_selection(dataset: &Dataset, names: &[&str]) -> AnalysisResult<Vec<VariableId>> {
    let mut ids = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(AnalysisError::DuplicateSelection {
                name: (*name).to_owned(),
            });
        }
        let variable =
            dataset
                .variable_by_name(name)
                .ok_or_else(|| AnalysisError::VariableNotFound {
                    name: (*name).to_owned(),
                })?;
        if !variable.kind().is_numeric() {
            return Err(AnalysisError::NotNumeric {
                name: (*name).to_owned(),
                kind: variable.kind(),
            });
        }
        ids.push(variable.id());
    }
    Ok(ids)
}

/// Extract a coefficient by name, surfacing absence as an error instead of
/// panicking.
fn named_coefficient(result: &RegressionResult, name: &str) -> AnalysisResult<f64> {
    result
        .coefficient(name)
        .ok_or_else(|| AnalysisError::CoefficientUnavailable {
            name: name.to_owned(),
        })
}
