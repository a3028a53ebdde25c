//! The model-checker collaborator seam.
//!
//! The oracle is the only operation in the toolchain expected to block.
//! Inconclusive outcomes are data, not errors: a timeout or an unsupported
//! construct is a legitimate terminal answer.

use serde::{Deserialize, Serialize};

use gantry_compiler::compile::VerificationQuery;

/// Why the oracle could not produce a definite answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefReason {
    Timeout,
    ResourceExhausted,
    UnsupportedConstruct,
    /// The in-flight check was cancelled by the collaborator.
    Cancelled,
}

/// The oracle's judgment on a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleOutcome {
    Definite(bool),
    Undef(UndefReason),
}

/// One step of a raw witness, over formal-model identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStep {
    pub formal_id: String,
}

impl RawStep {
    pub fn new(formal_id: impl Into<String>) -> Self {
        Self {
            formal_id: formal_id.into(),
        }
    }
}

/// Raw answer from the model checker: an outcome plus an optional
/// witness-step sequence demonstrating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleAnswer {
    pub outcome: OracleOutcome,
    pub witness: Option<Vec<RawStep>>,
}

impl OracleAnswer {
    pub fn definite(value: bool) -> Self {
        Self {
            outcome: OracleOutcome::Definite(value),
            witness: None,
        }
    }

    pub fn definite_with_witness(value: bool, witness: Vec<RawStep>) -> Self {
        Self {
            outcome: OracleOutcome::Definite(value),
            witness: Some(witness),
        }
    }

    pub fn undef(reason: UndefReason) -> Self {
        Self {
            outcome: OracleOutcome::Undef(reason),
            witness: None,
        }
    }
}

/// A pluggable model checker: submit one query, receive one answer.
///
/// Timeout policy, cancellation, and resource limits all live behind this
/// trait; the core only interprets whatever signal comes back.
pub trait Oracle: Sync {
    fn check(&self, query: &VerificationQuery) -> OracleAnswer;
}
