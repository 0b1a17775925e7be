//! Error types shared by the dataset model, the regression engine, and the
//! analyzers.

use thiserror::Error;

use crate::dataset::VariableKind;

/// Convenience alias used throughout the crate.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while configuring or running an analysis.
///
/// All failures are local and synchronous; nothing is retried or swallowed.
/// The caller is responsible for user-facing rendering.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("at least one independent variable is required")]
    NoPredictors,

    #[error("variable not found: {name}")]
    VariableNotFound { name: String },

    #[error("selected variables must be pairwise distinct: '{name}' was selected twice")]
    DuplicateSelection { name: String },

    #[error("variable '{name}' must be numeric, but its kind is {kind:?}")]
    NotNumeric { name: String, kind: VariableKind },

    #[error("insufficient observations: need at least {needed} for {predictors} independent variable(s), got {got}")]
    InsufficientObservations {
        needed: usize,
        got: usize,
        predictors: usize,
    },

    #[error("missing value for variable '{variable}' in observation {observation}")]
    MissingValue { observation: u32, variable: String },

    #[error("non-numeric value for variable '{variable}' in observation {observation}")]
    NonNumericValue { observation: u32, variable: String },

    #[error("design matrix is singular or rank-deficient (collinear predictors?)")]
    SingularMatrix,

    #[error("coefficient for '{name}' is missing from the regression result")]
    CoefficientUnavailable { name: String },
}
