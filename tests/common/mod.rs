//! Common test utilities and dataset builders.

use pathstat::{CellValue, Dataset, VariableKind};

/// Build a dataset from parallel numeric columns. Row `i` gets observation
/// index `i`.
#[allow(dead_code)]
pub fn numeric_dataset(name: &str, columns: &[(&str, &[f64])]) -> Dataset {
    let mut ds = Dataset::new(name);
    for (col, _) in columns {
        ds.add_variable(*col, VariableKind::Numeric);
    }
    for (col, values) in columns {
        for (i, v) in values.iter().enumerate() {
            ds.set_value(i as u32, col, CellValue::Number(*v))
                .expect("variable was just added");
        }
    }
    ds
}

/// Deterministic noise source (simple LCG) for reproducible fixtures.
#[allow(dead_code)]
pub fn noise_source(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate `y = intercept + slopes · x + noise_std * e` over `n` rows with
/// predictor columns named `x1, x2, ...`.
#[allow(dead_code)]
pub fn linear_dataset(
    n: usize,
    intercept: f64,
    slopes: &[f64],
    noise_std: f64,
    seed: u64,
) -> Dataset {
    let mut rand = noise_source(seed);
    let mut ds = Dataset::new("linear");
    let names: Vec<String> = (1..=slopes.len()).map(|j| format!("x{j}")).collect();
    for name in &names {
        ds.add_variable(name.clone(), VariableKind::Numeric);
    }
    ds.add_variable("y", VariableKind::Numeric);

    for i in 0..n {
        let mut y = intercept;
        for (j, slope) in slopes.iter().enumerate() {
            let x = rand();
            y += slope * x;
            ds.set_value(i as u32, &names[j], CellValue::Number(x))
                .expect("variable was just added");
        }
        y += noise_std * rand();
        ds.set_value(i as u32, "y", CellValue::Number(y))
            .expect("variable was just added");
    }
    ds
}
