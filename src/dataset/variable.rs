//! Variables (columns) and their declared kinds.

use serde::{Deserialize, Serialize};

/// Stable identity of a variable within its dataset.
///
/// Assigned once at insertion and never reused. Observation cells are keyed
/// by this id rather than by display name, so renaming a variable cannot
/// orphan stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariableId(pub(crate) u32);

/// The declared kind of a variable.
///
/// `Numeric` and `Quantitative` are interchangeable for regression
/// eligibility; the other three kinds are never regression-eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    Numeric,
    Quantitative,
    Text,
    Qualitative,
    Boolean,
}

impl VariableKind {
    /// Whether variables of this kind can enter a regression.
    pub fn is_numeric(self) -> bool {
        matches!(self, VariableKind::Numeric | VariableKind::Quantitative)
    }
}

/// A named, typed column of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    id: VariableId,
    name: String,
    kind: VariableKind,
}

impl Variable {
    pub(crate) fn new(id: VariableId, name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Stable identity within the owning dataset.
    pub fn id(&self) -> VariableId {
        self.id
    }

    /// Display name. Unique within the owning dataset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind.
    pub fn kind(&self) -> VariableKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kinds() {
        assert!(VariableKind::Numeric.is_numeric());
        assert!(VariableKind::Quantitative.is_numeric());
        assert!(!VariableKind::Text.is_numeric());
        assert!(!VariableKind::Qualitative.is_numeric());
        assert!(!VariableKind::Boolean.is_numeric());
    }
}
