use serde::{Deserialize, Serialize};

use crate::operator::TemporalOperator;
use crate::predicate::StatePredicate;

/// Operand count does not match the operator's arity.
///
/// Always a caller bug: surfaced at construction time, before any checker
/// interaction, and never retried.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Operator {op:?} takes {expected} operand(s), got {actual}")]
pub struct ArityError {
    pub op: TemporalOperator,
    pub expected: usize,
    pub actual: usize,
}

/// A temporal property formula.
///
/// Immutable after construction; one formula is built per verification
/// request. The only way to pair an operator with operands is through the
/// arity-checked [`apply`] constructor or the typed helpers, so a malformed
/// tree cannot exist.
///
/// [`apply`]: PropertyFormula::apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum PropertyFormula {
    /// Leaf predicate over model state.
    Predicate(StatePredicate),
    /// One of the four unary operators applied to a scope formula.
    Unary {
        op: TemporalOperator,
        operand: Box<PropertyFormula>,
    },
    /// Reachability: whenever `antecedent` holds, `consequent` follows.
    /// Argument order is part of the formula's meaning.
    LeadsTo {
        antecedent: Box<PropertyFormula>,
        consequent: Box<PropertyFormula>,
    },
}

impl PropertyFormula {
    /// Apply an operator to operands, validating arity against the tag.
    pub fn apply(
        op: TemporalOperator,
        operands: Vec<PropertyFormula>,
    ) -> Result<Self, ArityError> {
        let actual = operands.len();
        let mut operands = operands.into_iter();
        match (op.is_binary(), operands.next(), operands.next()) {
            (true, Some(antecedent), Some(consequent)) if actual == 2 => {
                Ok(PropertyFormula::LeadsTo {
                    antecedent: Box::new(antecedent),
                    consequent: Box::new(consequent),
                })
            }
            (false, Some(operand), None) => Ok(PropertyFormula::Unary {
                op,
                operand: Box::new(operand),
            }),
            _ => Err(ArityError {
                op,
                expected: op.arity(),
                actual,
            }),
        }
    }

    pub fn predicate(pred: StatePredicate) -> Self {
        PropertyFormula::Predicate(pred)
    }

    pub fn might_always(f: Self) -> Self {
        Self::unary(TemporalOperator::MightAlways, f)
    }

    pub fn must_always(f: Self) -> Self {
        Self::unary(TemporalOperator::MustAlways, f)
    }

    pub fn might_eventually(f: Self) -> Self {
        Self::unary(TemporalOperator::MightEventually, f)
    }

    pub fn must_eventually(f: Self) -> Self {
        Self::unary(TemporalOperator::MustEventually, f)
    }

    pub fn leads_to(antecedent: Self, consequent: Self) -> Self {
        PropertyFormula::LeadsTo {
            antecedent: Box::new(antecedent),
            consequent: Box::new(consequent),
        }
    }

    fn unary(op: TemporalOperator, operand: Self) -> Self {
        PropertyFormula::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// The operator at the root, if the root is not a predicate leaf.
    pub fn root_operator(&self) -> Option<TemporalOperator> {
        match self {
            PropertyFormula::Predicate(_) => None,
            PropertyFormula::Unary { op, .. } => Some(*op),
            PropertyFormula::LeadsTo { .. } => Some(TemporalOperator::LeadsTo),
        }
    }
}
