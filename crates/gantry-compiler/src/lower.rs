//! Collaborator seams and predicate lowering.
//!
//! The compiler itself never flattens a composite and never knows a
//! back-end's predicate syntax; both come in through these traits.

use gantry_model::statechart::{StatechartInstance, StatechartModel};
use gantry_property::predicate::StatePredicate;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LoweringError {
    /// The predicate's kind has no rendering in the lowering table.
    /// Re-attempting cannot change the outcome.
    #[error("No lowering for predicate kind '{kind}'")]
    UnsupportedPredicate { kind: String },
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Failed to unfold component '{component}': {reason}")]
pub struct FlattenError {
    pub component: String,
    pub reason: String,
}

/// Produces an unfolded view of a folded (composite) instance.
pub trait Flattener {
    fn unfold(
        &self,
        model: &StatechartModel,
        instance: &StatechartInstance,
    ) -> Result<StatechartInstance, FlattenError>;
}

/// Renders a leaf predicate into the target checker's query language.
pub trait PredicateLowering {
    fn lower(
        &self,
        model: &StatechartModel,
        instance: &StatechartInstance,
        predicate: &StatePredicate,
    ) -> Result<String, LoweringError>;
}

/// Default lowering for the two structural predicate kinds.
///
/// Renders location atoms as `instance.State` and variable atoms as
/// `instance.var == value`. `Custom` predicates have no rendering here and
/// must be handled by a back-end specific implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralLowering;

impl PredicateLowering for StructuralLowering {
    fn lower(
        &self,
        _model: &StatechartModel,
        instance: &StatechartInstance,
        predicate: &StatePredicate,
    ) -> Result<String, LoweringError> {
        match predicate {
            StatePredicate::InState { instance: target, state } => {
                let target = if target.is_empty() { &instance.name } else { target };
                Ok(format!("{target}.{state}"))
            }
            StatePredicate::VariableEquals {
                instance: target,
                variable,
                value,
            } => {
                let target = if target.is_empty() { &instance.name } else { target };
                Ok(format!("{target}.{variable} == {value}"))
            }
            StatePredicate::Custom { .. } => Err(LoweringError::UnsupportedPredicate {
                kind: predicate.kind_name(),
            }),
        }
    }
}
