//! Integration tests for moderation analysis.

mod common;

use approx::assert_relative_eq;
use common::{noise_source, numeric_dataset};
use pathstat::prelude::*;

fn crossed_design(n: usize, b1: f64, b2: f64, b3: f64, noise_std: f64, seed: u64) -> Dataset {
    let mut rand = noise_source(seed);
    let x: Vec<f64> = (0..n).map(|_| rand()).collect();
    let w: Vec<f64> = (0..n).map(|_| rand()).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(w.iter())
        .map(|(xv, wv)| b1 * xv + b2 * wv + b3 * xv * wv + noise_std * rand())
        .collect();
    numeric_dataset("crossed", &[("x", &x), ("w", &w), ("y", &y)])
}

#[test]
fn test_moderation_is_detected_when_present() {
    let ds = crossed_design(150, 2.0, 1.0, 1.5, 0.05, 5);
    let report = analyze_moderation(&ds, "x", "w", "y").expect("analysis should run");

    assert_relative_eq!(report.interaction_coefficient, 1.5, epsilon = 0.1);
    assert_eq!(report.verdict, ModerationVerdict::Moderated);
    assert_eq!(report.interaction_variable, "x*w");
    assert_eq!(
        report.model.coefficient_names(),
        vec!["Intercept", "x", "w", "x*w"]
    );
}

#[test]
fn test_null_interaction_classifies_as_no_moderation() {
    // No true product term: y = 2x + 3w exactly.
    let ds = crossed_design(150, 2.0, 3.0, 0.0, 0.0, 11);
    let report = analyze_moderation(&ds, "x", "w", "y").expect("analysis should run");

    assert!(
        report.interaction_coefficient.abs() < 1e-8,
        "interaction coefficient was {}",
        report.interaction_coefficient
    );
    assert_eq!(report.verdict, ModerationVerdict::NoModeration);
}

#[test]
fn test_caller_dataset_is_never_mutated() {
    let ds = crossed_design(60, 1.0, -1.0, 0.5, 0.1, 23);
    let snapshot = ds.clone();

    analyze_moderation(&ds, "x", "w", "y").expect("analysis should run");

    // Variable list and every observation's cells are unchanged; the
    // interaction column lived only on the private clone.
    assert_eq!(ds, snapshot);
    assert!(ds.variable_by_name("x*w").is_none());
    assert_eq!(ds.variable_count(), 3);
}

#[test]
fn test_rows_with_unusable_sources_surface_as_data_quality_errors() {
    let mut ds = crossed_design(40, 1.0, 1.0, 1.0, 0.0, 31);
    ds.set_value(12, "x", CellValue::Text("bad".into())).unwrap();

    // The interaction cell for row 12 is materialized as missing, and the
    // fit rejects that row by index instead of treating the product as zero.
    let err = analyze_moderation(&ds, "x", "w", "y").unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::MissingValue { observation: 12, ref variable } if variable == "x*w"
    ) || matches!(
        err,
        AnalysisError::NonNumericValue { observation: 12, ref variable } if variable == "x"
    ));
}

#[test]
fn test_selection_gate_fires_before_cloning() {
    let ds = crossed_design(20, 1.0, 1.0, 0.0, 0.0, 3);

    assert!(matches!(
        analyze_moderation(&ds, "w", "w", "y"),
        Err(AnalysisError::DuplicateSelection { name }) if name == "w"
    ));
    assert!(matches!(
        analyze_moderation(&ds, "x", "ghost", "y"),
        Err(AnalysisError::VariableNotFound { name }) if name == "ghost"
    ));

    let mut typed = ds.clone();
    typed.add_variable("flag", VariableKind::Boolean);
    assert!(matches!(
        analyze_moderation(&typed, "x", "flag", "y"),
        Err(AnalysisError::NotNumeric { name, .. }) if name == "flag"
    ));
}
