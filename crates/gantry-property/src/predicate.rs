use serde::{Deserialize, Serialize};

/// Discriminant used to key the pluggable predicate-lowering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateKind {
    InState,
    VariableEquals,
    Custom,
}

/// A predicate over model state — the leaf level of property formulas.
///
/// The two structural kinds reference the statechart model directly.
/// `Custom` carries its own kind text so a back-end can extend the
/// predicate space without changes here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatePredicate {
    /// The instance's active configuration contains the named state.
    InState { instance: String, state: String },
    /// A variable of the instance equals a literal value.
    VariableEquals {
        instance: String,
        variable: String,
        value: String,
    },
    /// Back-end specific predicate, opaque to the core.
    Custom { kind: String, text: String },
}

impl StatePredicate {
    pub fn kind(&self) -> PredicateKind {
        match self {
            StatePredicate::InState { .. } => PredicateKind::InState,
            StatePredicate::VariableEquals { .. } => PredicateKind::VariableEquals,
            StatePredicate::Custom { .. } => PredicateKind::Custom,
        }
    }

    /// Human-readable kind name for error reporting.
    pub fn kind_name(&self) -> String {
        match self {
            StatePredicate::Custom { kind, .. } => kind.clone(),
            StatePredicate::InState { .. } => "in_state".to_string(),
            StatePredicate::VariableEquals { .. } => "variable_equals".to_string(),
        }
    }
}
