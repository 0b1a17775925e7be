//! Plain-text rendering of analysis reports.
//!
//! Pure formatting functions over the structured report types. No I/O, no
//! styling; callers that want tables or HTML build their own views from the
//! same structs.

use std::fmt::Write;

use crate::analysis::{MediationReport, ModerationReport, ModerationVerdict};
use crate::regression::RegressionResult;

/// One-block summary of a regression fit.
pub fn render_regression(result: &RegressionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "n = {}, independent variables = {}",
        result.n_observations, result.n_predictors
    );
    let _ = writeln!(out, "R-squared: {:.4}", result.r_squared);
    let _ = writeln!(out, "Adjusted R-squared: {:.4}", result.adj_r_squared);
    let _ = writeln!(
        out,
        "Residual standard error: {:.4}",
        result.residual_std_error
    );
    let _ = writeln!(
        out,
        "SSR: {:.4}  SSE: {:.4}  SST: {:.4}",
        result.ssr, result.sse, result.sst
    );
    let _ = writeln!(out, "Coefficients:");
    for (name, value) in result.coefficients() {
        let _ = writeln!(out, "  {name}: {value:.4}");
    }
    out
}

/// Summary of a mediation analysis: effects first, then the three fits.
pub fn render_mediation(report: &MediationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mediation analysis");
    let _ = writeln!(out, "Predictor (X): {}", report.predictor);
    let _ = writeln!(out, "Mediator (M): {}", report.mediator);
    let _ = writeln!(out, "Outcome (Y): {}", report.outcome);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Indirect effect (a*b): {:.4} ({:.4} * {:.4})",
        report.indirect_effect, report.a_path, report.b_path
    );
    let _ = writeln!(out, "Direct effect (c'): {:.4}", report.direct_effect);
    let _ = writeln!(out, "Total effect (c): {:.4}", report.total_effect);
    let _ = writeln!(
        out,
        "Direct + indirect (c' + a*b): {:.4}",
        report.total_effect_check
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Regression 1: {} ~ {}", report.mediator, report.predictor);
    out.push_str(&render_regression(&report.mediator_model));
    let _ = writeln!(
        out,
        "\nRegression 2: {} ~ {}, {}",
        report.outcome, report.predictor, report.mediator
    );
    out.push_str(&render_regression(&report.outcome_model));
    let _ = writeln!(
        out,
        "\nRegression 3: {} ~ {} (total effect)",
        report.outcome, report.predictor
    );
    out.push_str(&render_regression(&report.total_model));
    out
}

/// Summary of a moderation analysis, closing with the descriptive verdict.
pub fn render_moderation(report: &ModerationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Moderation analysis");
    let _ = writeln!(out, "Predictor (X): {}", report.predictor);
    let _ = writeln!(out, "Moderator (W): {}", report.moderator);
    let _ = writeln!(out, "Outcome (Y): {}", report.outcome);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Regression: {} ~ {}, {}, {}",
        report.outcome, report.predictor, report.moderator, report.interaction_variable
    );
    out.push_str(&render_regression(&report.model));
    let _ = writeln!(
        out,
        "\nInteraction coefficient ({}): {:.4}",
        report.interaction_variable, report.interaction_coefficient
    );
    match report.verdict {
        ModerationVerdict::Moderated => {
            let _ = writeln!(
                out,
                "The effect of {} on {} appears to vary with {} (descriptive, not inferential).",
                report.predictor, report.outcome, report.moderator
            );
        }
        ModerationVerdict::NoModeration => {
            let _ = writeln!(
                out,
                "No moderation detected: the interaction coefficient is close to zero."
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_mediation, analyze_moderation};
    use crate::dataset::{CellValue, Dataset, VariableKind};
    use crate::regression::fit_ols;

    fn demo_dataset() -> Dataset {
        let mut ds = Dataset::new("demo");
        ds.add_variable("x", VariableKind::Numeric);
        ds.add_variable("w", VariableKind::Numeric);
        ds.add_variable("y", VariableKind::Numeric);
        for i in 0..10u32 {
            let x = i as f64;
            let w = ((i % 3) + 1) as f64;
            ds.set_value(i, "x", CellValue::Number(x)).unwrap();
            ds.set_value(i, "w", CellValue::Number(w)).unwrap();
            ds.set_value(i, "y", CellValue::Number(1.0 + 2.0 * x + 0.5 * w))
                .unwrap();
        }
        ds
    }

    #[test]
    fn test_regression_summary_lists_named_coefficients() {
        let ds = demo_dataset();
        let result = fit_ols(&ds, "y", &["x", "w"]).unwrap();
        let text = render_regression(&result);
        assert!(text.contains("R-squared: 1.0000"));
        assert!(text.contains("  Intercept: 1.0000"));
        assert!(text.contains("  x: 2.0000"));
        assert!(text.contains("  w: 0.5000"));
    }

    #[test]
    fn test_mediation_summary_contains_all_three_regressions() {
        let ds = demo_dataset();
        let report = analyze_mediation(&ds, "x", "w", "y").unwrap();
        let text = render_mediation(&report);
        assert!(text.contains("Regression 1: w ~ x"));
        assert!(text.contains("Regression 2: y ~ x, w"));
        assert!(text.contains("Regression 3: y ~ x (total effect)"));
        assert!(text.contains("Direct effect (c')"));
    }

    #[test]
    fn test_moderation_summary_names_the_interaction() {
        let ds = demo_dataset();
        let report = analyze_moderation(&ds, "x", "w", "y").unwrap();
        let text = render_moderation(&report);
        assert!(text.contains("Interaction coefficient (x*w)"));
        assert!(text.contains("No moderation detected"));
    }
}
