pub mod formula;
pub mod operator;
pub mod predicate;
pub mod target;
pub mod tribool;

pub use formula::{ArityError, PropertyFormula};
pub use operator::TemporalOperator;
pub use predicate::{PredicateKind, StatePredicate};
pub use tribool::ThreeValued;
