//! Statistical analysis over user-defined tabular datasets.
//!
//! This library provides an in-memory dataset model (typed variables, sparse
//! observations) together with an OLS multiple linear regression engine and
//! two analyses built on top of it: mediation (direct/indirect effect
//! decomposition) and moderation (interaction-term testing).
//!
//! # Example
//!
//! ```rust,ignore
//! use pathstat::prelude::*;
//!
//! let mut data = Dataset::new("study");
//! data.add_variable("hours", VariableKind::Numeric);
//! data.add_variable("score", VariableKind::Numeric);
//! for (i, (h, s)) in [(1.0, 5.0), (2.0, 8.0), (3.0, 11.0)].iter().enumerate() {
//!     data.set_value(i as u32, "hours", CellValue::Number(*h))?;
//!     data.set_value(i as u32, "score", CellValue::Number(*s))?;
//! }
//!
//! let result = fit_ols(&data, "score", &["hours"])?;
//! println!("R² = {}", result.r_squared);
//! println!("slope = {:?}", result.coefficient("hours"));
//! ```
//!
//! Reports are plain structured data; [`render`] offers optional plain-text
//! formatting for callers that want it.
//!
//! Everything runs synchronously to completion. Analyses take `&Dataset` and
//! never mutate their input (moderation materializes its interaction column
//! on a private deep copy), so concurrent reads are safe; structural edits
//! need the exclusive access the borrow checker already demands.

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod regression;
pub mod render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{
        analyze_mediation, analyze_moderation, MediationReport, ModerationReport,
        ModerationVerdict,
    };
    pub use crate::dataset::{CellValue, Dataset, Observation, Variable, VariableId, VariableKind};
    pub use crate::error::{AnalysisError, AnalysisResult};
    pub use crate::regression::{fit_ols, RegressionResult};
}

pub use crate::analysis::{
    analyze_mediation, analyze_moderation, MediationReport, ModerationReport, ModerationVerdict,
};
pub use crate::dataset::{CellValue, Dataset, Observation, Variable, VariableId, VariableKind};
pub use crate::error::{AnalysisError, AnalysisResult};
pub use crate::regression::{fit_ols, RegressionResult};
