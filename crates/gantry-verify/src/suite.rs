//! Batched verification of independent formulas against one instance.

use rayon::prelude::*;

use gantry_compiler::compile::{compile, CompileError, VerificationQuery};
use gantry_compiler::lower::{Flattener, PredicateLowering};
use gantry_model::statechart::{StatechartInstance, StatechartModel};
use gantry_property::formula::PropertyFormula;

use crate::interpret::{interpret, VerificationResult};
use crate::oracle::Oracle;

/// Outcome of one formula in a suite run, tagged with its input position.
#[derive(Debug)]
pub struct SuiteOutcome {
    pub formula_index: usize,
    pub result: Result<VerificationResult, CompileError>,
}

/// Verify a set of formulas against one instance.
///
/// Every formula compiles independently (its own query, its own identity
/// map) and compiled queries are submitted to the oracle in parallel.
/// Nothing couples sibling queries: no shared mutable state, no dependence
/// on completion order. Outcomes come back in input order.
pub fn run_suite(
    model: &StatechartModel,
    formulas: &[PropertyFormula],
    instance: &StatechartInstance,
    flattener: Option<&dyn Flattener>,
    lowering: &dyn PredicateLowering,
    oracle: &dyn Oracle,
) -> Vec<SuiteOutcome> {
    let compiled: Vec<(usize, Result<VerificationQuery, CompileError>)> = formulas
        .iter()
        .enumerate()
        .map(|(i, formula)| (i, compile(model, formula, instance, flattener, lowering)))
        .collect();

    // Indexed parallel collect keeps input order in the output vector.
    compiled
        .into_par_iter()
        .map(|(formula_index, compiled)| {
            let result = compiled.map(|query| {
                let answer = oracle.check(&query);
                interpret(&answer, &query.identity_map)
            });
            SuiteOutcome {
                formula_index,
                result,
            }
        })
        .collect()
}
