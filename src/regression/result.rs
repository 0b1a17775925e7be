//! Regression result type.

use serde::{Deserialize, Serialize};

/// Label used for the intercept entry in the coefficient list.
pub const INTERCEPT_LABEL: &str = "Intercept";

/// The outcome of a single OLS fit.
///
/// Coefficients are an ordered name/value mapping: the intercept first under
/// [`INTERCEPT_LABEL`], then one entry per independent variable in call
/// order. Consumers should resolve coefficients by name via
/// [`coefficient`](Self::coefficient) rather than by position; position
/// alone is fragile once intercepts or variable lists change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Ordered `(name, value)` coefficient pairs, intercept first.
    pub(crate) coefficients: Vec<(String, f64)>,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Adjusted R²: `1 − (1−R²)(n−1)/(n−k−1)`. NaN when `n = k + 1`.
    pub adj_r_squared: f64,
    /// Residual standard error: `sqrt(SSE / (n−k−1))`. NaN when `n = k + 1`.
    pub residual_std_error: f64,
    /// Regression sum of squares.
    pub ssr: f64,
    /// Residual sum of squares.
    pub sse: f64,
    /// Total sum of squares (`SSE + SSR`).
    pub sst: f64,
    /// Number of observations used in the fit.
    pub n_observations: usize,
    /// Number of independent variables (excluding the intercept).
    pub n_predictors: usize,
}

impl RegressionResult {
    /// The coefficient fitted for `name`, or `None` if no such term exists.
    ///
    /// `name` is either an independent variable name or [`INTERCEPT_LABEL`].
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.coefficients
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// The intercept term.
    pub fn intercept(&self) -> Option<f64> {
        self.coefficient(INTERCEPT_LABEL)
    }

    /// Ordered `(name, value)` coefficient pairs, intercept first.
    pub fn coefficients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.coefficients.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Coefficient names in positional order.
    pub fn coefficient_names(&self) -> Vec<&str> {
        self.coefficients.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Coefficient values in positional order.
    pub fn coefficient_values(&self) -> Vec<f64> {
        self.coefficients.iter().map(|(_, v)| *v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegressionResult {
        RegressionResult {
            coefficients: vec![
                (INTERCEPT_LABEL.to_owned(), 1.0),
                ("x".to_owned(), 2.0),
                ("w".to_owned(), -0.5),
            ],
            r_squared: 0.9,
            adj_r_squared: 0.88,
            residual_std_error: 0.3,
            ssr: 9.0,
            sse: 1.0,
            sst: 10.0,
            n_observations: 20,
            n_predictors: 2,
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let r = sample();
        assert_eq!(r.coefficient("x"), Some(2.0));
        assert_eq!(r.coefficient("w"), Some(-0.5));
        assert_eq!(r.intercept(), Some(1.0));
        assert_eq!(r.coefficient("missing"), None);
    }

    #[test]
    fn test_positional_order_is_preserved() {
        let r = sample();
        assert_eq!(r.coefficient_names(), vec![INTERCEPT_LABEL, "x", "w"]);
        assert_eq!(r.coefficient_values(), vec![1.0, 2.0, -0.5]);
    }
}
