use serde::{Deserialize, Serialize};

/// The five temporal operators of the property language.
///
/// "Might" operators quantify existentially over execution paths, "must"
/// operators universally. `LeadsTo` is the reachability relation: whenever
/// the antecedent holds, the consequent eventually follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalOperator {
    MightAlways,
    MustAlways,
    MightEventually,
    MustEventually,
    LeadsTo,
}

impl TemporalOperator {
    /// Canonical symbol in the checker's query language.
    ///
    /// A rendering detail only; semantic identity is the variant itself.
    pub fn symbol(self) -> &'static str {
        match self {
            TemporalOperator::MightAlways => "E[]",
            TemporalOperator::MustAlways => "A[]",
            TemporalOperator::MightEventually => "E<>",
            TemporalOperator::MustEventually => "A<>",
            TemporalOperator::LeadsTo => "-->",
        }
    }

    /// Number of sub-formulas the operator takes.
    pub fn arity(self) -> usize {
        match self {
            TemporalOperator::LeadsTo => 2,
            _ => 1,
        }
    }

    pub fn is_binary(self) -> bool {
        self.arity() == 2
    }
}
