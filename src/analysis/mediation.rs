//! Mediation analysis (Baron-Kenny path decomposition).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::AnalysisResult;
use crate::regression::{fit_ols, RegressionResult};

use super::{check_selection, named_coefficient};

/// The decomposition of a predictor's effect on an outcome into direct and
/// mediator-indirect components.
///
/// Effects are point estimates only; no standard errors or significance
/// tests are computed. `total_effect_check` (`c' + a·b`) is reported next to
/// the directly fitted `total_effect` (`c`) and is expected to approximate
/// it, not to equal it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediationReport {
    pub predictor: String,
    pub mediator: String,
    pub outcome: String,
    /// Predictor → mediator effect (coefficient of X in `M ~ X`).
    pub a_path: f64,
    /// Mediator → outcome effect controlling for the predictor
    /// (coefficient of M in `Y ~ X, M`).
    pub b_path: f64,
    /// Direct effect (coefficient of X in `Y ~ X, M`).
    pub direct_effect: f64,
    /// Total effect (coefficient of X in `Y ~ X`).
    pub total_effect: f64,
    /// Indirect effect through the mediator: `a · b`.
    pub indirect_effect: f64,
    /// `direct + indirect`; approximates `total_effect`.
    pub total_effect_check: f64,
    /// Regression 1: `M ~ X`.
    pub mediator_model: RegressionResult,
    /// Regression 2: `Y ~ X, M`.
    pub outcome_model: RegressionResult,
    /// Regression 3: `Y ~ X`.
    pub total_model: RegressionResult,
}

/// Decompose the effect of `predictor` on `outcome` through `mediator`.
///
/// Runs three regressions on the same dataset: `M ~ X`, `Y ~ X, M`, and
/// `Y ~ X`. Coefficients are extracted by name, never by position.
///
/// # Errors
///
/// Fails before running any regression when the three variables are not
/// pairwise distinct, or any of them is unknown or not numeric-kinded.
/// Regression-level failures (insufficient rows, unusable cells, singular
/// design) propagate unchanged.
pub fn analyze_mediation(
    dataset: &Dataset,
    predictor: &str,
    mediator: &str,
    outcome: &str,
) -> AnalysisResult<MediationReport> {
    check_selection(dataset, &[predictor, mediator, outcome])?;
    debug!("mediation analysis: {predictor} -> {mediator} -> {outcome}");

    // Regression 1: M ~ X.
    let mediator_model = fit_ols(dataset, mediator, &[predictor])?;
    let a_path = named_coefficient(&mediator_model, predictor)?;

    // Regression 2: Y ~ X, M.
    let outcome_model = fit_ols(dataset, outcome, &[predictor, mediator])?;
    let direct_effect = named_coefficient(&outcome_model, predictor)?;
    let b_path = named_coefficient(&outcome_model, mediator)?;

    // Regression 3: Y ~ X (mediator excluded).
    let total_model = fit_ols(dataset, outcome, &[predictor])?;
    let total_effect = named_coefficient(&total_model, predictor)?;

    let indirect_effect = a_path * b_path;
    let total_effect_check = direct_effect + indirect_effect;

    Ok(MediationReport {
        predictor: predictor.to_owned(),
        mediator: mediator.to_owned(),
        outcome: outcome.to_owned(),
        a_path,
        b_path,
        direct_effect,
        total_effect,
        indirect_effect,
        total_effect_check,
        mediator_model,
        outcome_model,
        total_model,
    })
}
