use serde::{Deserialize, Serialize};

use gantry_compiler::identity::IdentityMap;
use gantry_model::port::{self, ScenarioMarker};
use gantry_model::statechart::ElementRef;
use gantry_property::tribool::ThreeValued;

use crate::oracle::{OracleAnswer, OracleOutcome, RawStep};

/// A back-annotated witness step over source-model elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub element: ElementRef,
    /// Set when the step lands on a well-known scenario state.
    pub marker: Option<ScenarioMarker>,
}

/// An ordered witness over source-model elements, ready for replay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Three-valued verdict plus the optional annotated witness behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verdict: ThreeValued,
    pub trace: Option<Trace>,
}

/// Interpret a raw oracle answer against the query's identity map.
///
/// A pure function of its two arguments: interpreting the same answer
/// twice yields equal results. Inconclusive outcomes become `Undef` with
/// no trace; any witness data alongside them is ignored.
pub fn interpret(answer: &OracleAnswer, map: &IdentityMap) -> VerificationResult {
    match &answer.outcome {
        OracleOutcome::Undef(reason) => {
            if answer.witness.is_some() {
                tracing::debug!(
                    ?reason,
                    "oracle sent witness data with an inconclusive outcome, ignoring"
                );
            }
            VerificationResult {
                verdict: ThreeValued::Undef,
                trace: None,
            }
        }
        OracleOutcome::Definite(value) => {
            let verdict = ThreeValued::from(*value);
            let trace = answer
                .witness
                .as_ref()
                .map(|steps| annotate(steps, map));
            VerificationResult { verdict, trace }
        }
    }
}

/// Translate raw witness steps into source-model trace steps.
///
/// Steps with no back-mapping are synthetic checker states introduced by
/// the lowering; they are elided, not errors. Event steps through
/// turned-out ports are rewritten to the canonical port name, since the
/// reversed side is a wiring artifact that must not leak into user-facing
/// traces.
fn annotate(steps: &[RawStep], map: &IdentityMap) -> Trace {
    let mut annotated = Vec::with_capacity(steps.len());
    let mut elided = 0usize;

    for step in steps {
        let Some(element) = map.resolve(&step.formal_id) else {
            elided += 1;
            continue;
        };
        let element = canonicalize(element.clone());
        let marker = match &element {
            ElementRef::State { state, .. } => port::marker_for(state),
            _ => None,
        };
        annotated.push(TraceStep { element, marker });
    }

    if elided > 0 {
        tracing::debug!(elided, "elided witness steps with no source counterpart");
    }

    Trace { steps: annotated }
}

fn canonicalize(element: ElementRef) -> ElementRef {
    match element {
        ElementRef::Event { port, event } if port::is_turned_out(&port) => {
            match port::canonical_port_name(&port) {
                Ok(canonical) => ElementRef::Event {
                    port: canonical.to_string(),
                    event,
                },
                Err(err) => {
                    // Ambiguous names stay as declared rather than being
                    // toggled on a guess.
                    tracing::warn!(%err, "leaving ambiguous port name unresolved in trace");
                    ElementRef::Event { port, event }
                }
            }
        }
        other => other,
    }
}
