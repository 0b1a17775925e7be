//! Least-squares solver and goodness-of-fit statistics.

use faer::{Col, Mat};

use crate::error::{AnalysisError, AnalysisResult};

/// Relative pivot tolerance for declaring the normal equations singular.
const PIVOT_TOL: f64 = 1e-10;

/// Raw solver output: coefficient vector (intercept first) and fit
/// statistics.
#[derive(Debug)]
pub(crate) struct OlsFit {
    /// Length `k + 1`: intercept, then one slope per design column.
    pub beta: Col<f64>,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub residual_std_error: f64,
    pub ssr: f64,
    pub sse: f64,
    pub sst: f64,
}

/// Solve OLS with an intercept via the normal equations.
///
/// The intercept column is prepended here; `x` holds only the independent
/// columns. A rank-deficient design surfaces as `SingularMatrix` rather than
/// a silently regularized solution.
pub(crate) fn solve(x: &Mat<f64>, y: &Col<f64>) -> AnalysisResult<OlsFit> {
    let n = x.nrows();
    let k = x.ncols();

    // Augment with the all-ones intercept column.
    let mut x_aug = Mat::zeros(n, k + 1);
    for i in 0..n {
        x_aug[(i, 0)] = 1.0;
        for j in 0..k {
            x_aug[(i, j + 1)] = x[(i, j)];
        }
    }
    let p = k + 1;

    // Normal equations: X'X beta = X'y.
    let mut xtx = Mat::zeros(p, p);
    for i in 0..p {
        for j in 0..p {
            let mut sum = 0.0;
            for row in 0..n {
                sum += x_aug[(row, i)] * x_aug[(row, j)];
            }
            xtx[(i, j)] = sum;
        }
    }

    let mut xty = Col::zeros(p);
    for j in 0..p {
        let mut sum = 0.0;
        for row in 0..n {
            sum += x_aug[(row, j)] * y[row];
        }
        xty[j] = sum;
    }

    let beta = solve_symmetric(&xtx, &xty)?;

    // Fitted values and residual sum of squares.
    let mut sse = 0.0;
    let mut fitted = Col::zeros(n);
    for i in 0..n {
        let mut pred = 0.0;
        for j in 0..p {
            pred += x_aug[(i, j)] * beta[j];
        }
        fitted[i] = pred;
        let r = y[i] - pred;
        sse += r * r;
    }

    let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
    let mut ssr = 0.0;
    for i in 0..n {
        let d = fitted[i] - y_mean;
        ssr += d * d;
    }
    let sst = sse + ssr;

    let r_squared = if sst > 0.0 {
        ssr / sst
    } else if sse == 0.0 {
        // Constant response, perfectly reproduced.
        1.0
    } else {
        0.0
    };

    let df = n as f64 - p as f64;
    let (adj_r_squared, residual_std_error) = if df > 0.0 {
        (
            1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / df,
            (sse / df).sqrt(),
        )
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(OlsFit {
        beta,
        r_squared,
        adj_r_squared,
        residual_std_error,
        ssr,
        sse,
        sst,
    })
}

/// Solve the symmetric positive definite system `Ax = b` by Cholesky
/// decomposition. A non-positive pivot means the design is rank-deficient.
fn solve_symmetric(a: &Mat<f64>, b: &Col<f64>) -> AnalysisResult<Col<f64>> {
    let n = a.nrows();

    // Cholesky decomposition: A = LL'.
    let mut l: Mat<f64> = Mat::zeros(n, n);
    for j in 0..n {
        let mut sum = 0.0;
        for k in 0..j {
            sum += l[(j, k)] * l[(j, k)];
        }
        let diag = a[(j, j)] - sum;
        if diag <= PIVOT_TOL * a[(j, j)].abs().max(1.0) {
            return Err(AnalysisError::SingularMatrix);
        }
        l[(j, j)] = diag.sqrt();

        for i in (j + 1)..n {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[(i, k)] * l[(j, k)];
            }
            l[(i, j)] = (a[(i, j)] - sum) / l[(j, j)];
        }
    }

    // Forward substitution: Ly = b.
    let mut y_sol = Col::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[(i, j)] * y_sol[j];
        }
        y_sol[i] = sum / l[(i, i)];
    }

    // Backward substitution: L'x = y.
    let mut x = Col::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y_sol[i];
        for j in (i + 1)..n {
            sum -= l[(j, i)] * x[j];
        }
        x[i] = sum / l[(i, i)];
    }

    Ok(x)
}
