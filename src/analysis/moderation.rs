//! Moderation analysis via a derived interaction term.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::{CellValue, Dataset, VariableKind};
use crate::error::AnalysisResult;
use crate::regression::{fit_ols, RegressionResult};

use super::{check_selection, named_coefficient};

/// Interaction coefficients with an absolute value above this are reported
/// as moderation. A descriptive cutoff, not a significance test: no standard
/// errors exist to test against.
pub const MODERATION_THRESHOLD: f64 = 0.001;

/// Descriptive classification of the interaction coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationVerdict {
    /// `|interaction coefficient| > MODERATION_THRESHOLD`: the
    /// predictor-outcome relationship varies with the moderator.
    Moderated,
    /// The interaction coefficient is within the threshold of zero.
    NoModeration,
}

/// Result of a moderation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationReport {
    pub predictor: String,
    pub moderator: String,
    pub outcome: String,
    /// Name of the derived interaction column (`"{predictor}*{moderator}"`).
    pub interaction_variable: String,
    /// Coefficient of the interaction term.
    pub interaction_coefficient: f64,
    /// Heuristic classification of the interaction coefficient.
    pub verdict: ModerationVerdict,
    /// The full fit of `Y ~ X, W, X*W`.
    pub model: RegressionResult,
}

/// Test whether the effect of `predictor` on `outcome` depends on
/// `moderator`.
///
/// The interaction column is materialized onto a private deep copy of the
/// dataset; the caller's dataset is never touched. Rows where either source
/// value is unusable get a missing interaction cell, so the regression's
/// data-quality gate rejects them explicitly instead of silently biasing the
/// fit.
///
/// # Errors
///
/// Fails before cloning when the three variables are not pairwise distinct,
/// or any of them is unknown or not numeric-kinded. Regression-level
/// failures propagate unchanged.
pub fn analyze_moderation(
    dataset: &Dataset,
    predictor: &str,
    moderator: &str,
    outcome: &str,
) -> AnalysisResult<ModerationReport> {
    let ids = check_selection(dataset, &[predictor, moderator, outcome])?;
    let (x_id, w_id) = (ids[0], ids[1]);
    debug!("moderation analysis: {predictor} x {moderator} -> {outcome}");

    // Variable ids survive the deep copy unchanged.
    let mut scratch = dataset.clone();
    let interaction_variable = format!("{predictor}*{moderator}");
    // Reuses the existing column if a variable with this exact name is
    // already present.
    let interaction_id = scratch.add_variable(&interaction_variable, VariableKind::Numeric);

    let products: Vec<(u32, CellValue)> = scratch
        .observations()
        .map(|(index, obs)| {
            let x = obs.get(x_id).and_then(CellValue::as_number);
            let w = obs.get(w_id).and_then(CellValue::as_number);
            let cell = match (x, w) {
                (Some(x), Some(w)) => CellValue::Number(x * w),
                _ => CellValue::Missing,
            };
            (index, cell)
        })
        .collect();
    for (index, cell) in products {
        scratch.set_cell(index, interaction_id, cell);
    }

    let model = fit_ols(
        &scratch,
        outcome,
        &[predictor, moderator, &interaction_variable],
    )?;
    let interaction_coefficient = named_coefficient(&model, &interaction_variable)?;

    let verdict = if interaction_coefficient.abs() > MODERATION_THRESHOLD {
        ModerationVerdict::Moderated
    } else {
        ModerationVerdict::NoModeration
    };

    Ok(ModerationReport {
        predictor: predictor.to_owned(),
        moderator: moderator.to_owned(),
        outcome: outcome.to_owned(),
        interaction_variable,
        interaction_coefficient,
        verdict,
        model,
    })
}
