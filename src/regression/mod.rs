//! OLS multiple linear regression over a [`Dataset`].
//!
//! The entry point is [`fit_ols`]: it validates the variable selection,
//! extracts a dense design matrix from the (possibly sparse) dataset, solves
//! the least-squares problem, and returns a [`RegressionResult`] with named
//! coefficients and goodness-of-fit statistics. The input dataset is never
//! mutated.

mod design;
mod ols;
mod result;

use log::debug;

use crate::dataset::Dataset;
use crate::error::AnalysisResult;

pub use result::{RegressionResult, INTERCEPT_LABEL};

/// Fit an ordinary least-squares regression with an intercept.
///
/// `independents` supplies the design-matrix columns in order; the returned
/// coefficient list is `["Intercept", independents[0], ...]` in that order.
///
/// # Errors
///
/// Fails before any numeric work when the selection is empty, a variable is
/// unknown or not numeric-kinded, or there are not strictly more observations
/// than independent variables. Fails during matrix construction when a
/// required cell is missing or non-numeric, naming the offending observation
/// and variable. Fails with a singular-matrix error when the design is
/// rank-deficient.
pub fn fit_ols(
    dataset: &Dataset,
    dependent: &str,
    independents: &[&str],
) -> AnalysisResult<RegressionResult> {
    let design = design::build_design(dataset, dependent, independents)?;
    debug!(
        "fitting {} ~ {:?} on {} observation(s)",
        dependent,
        independents,
        design.y.nrows()
    );

    let fit = ols::solve(&design.x, &design.y)?;

    let mut coefficients = Vec::with_capacity(independents.len() + 1);
    coefficients.push((INTERCEPT_LABEL.to_owned(), fit.beta[0]));
    for (j, name) in independents.iter().enumerate() {
        coefficients.push(((*name).to_owned(), fit.beta[j + 1]));
    }

    Ok(RegressionResult {
        coefficients,
        r_squared: fit.r_squared,
        adj_r_squared: fit.adj_r_squared,
        residual_std_error: fit.residual_std_error,
        ssr: fit.ssr,
        sse: fit.sse,
        sst: fit.sst,
        n_observations: design.y.nrows(),
        n_predictors: independents.len(),
    })
}
