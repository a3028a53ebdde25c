use gantry_model::derived::{self, DerivedError};
use gantry_model::statechart::{StatechartInstance, StatechartModel};
use gantry_property::formula::PropertyFormula;
use gantry_property::operator::TemporalOperator;

use crate::identity::IdentityMap;
use crate::lower::{FlattenError, Flattener, LoweringError, PredicateLowering};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Instance '{instance}' references component '{component}' which is not in the model")]
    UnknownInstanceComponent { instance: String, component: String },

    #[error(
        "Component '{component}' in package '{package}' is folded and no flattening facility is reachable"
    )]
    NotUnfolded { component: String, package: String },

    #[error("Flattening failed: {0}")]
    Flatten(#[from] FlattenError),

    #[error("While lowering formula over instance '{instance}': {source}")]
    Lowering {
        instance: String,
        #[source]
        source: LoweringError,
    },

    #[error("Structural query failed: {0}")]
    Derived(#[from] DerivedError),
}

/// A compiled, single-use verification query.
///
/// Binds the rendered query text to the instance it was compiled against
/// and to the identity map recorded during lowering. One oracle
/// submission, one result; the map is owned here and never shared.
#[derive(Debug, Clone)]
pub struct VerificationQuery {
    pub text: String,
    pub instance: StatechartInstance,
    pub identity_map: IdentityMap,
}

/// Lower a property formula against a statechart instance.
///
/// The instance's owning package must be unfolded; a folded instance is
/// first handed to `flattener`, and compilation fails if none is reachable.
/// Leaf predicates render through `lowering`. Compilation is
/// deterministic: the same inputs always produce the same query, so
/// failures are reported, never retried.
pub fn compile(
    model: &StatechartModel,
    formula: &PropertyFormula,
    instance: &StatechartInstance,
    flattener: Option<&dyn Flattener>,
    lowering: &dyn PredicateLowering,
) -> Result<VerificationQuery, CompileError> {
    let instance = resolve_unfolded(model, instance, flattener)?;

    let component = model.component(&instance.component).ok_or_else(|| {
        CompileError::UnknownInstanceComponent {
            instance: instance.name.clone(),
            component: instance.component.clone(),
        }
    })?;

    let mut identity_map = IdentityMap::new();
    identity_map.register_instance(&instance, component);

    let text = render(model, formula, &instance, lowering).map_err(|source| {
        CompileError::Lowering {
            instance: instance.name.clone(),
            source,
        }
    })?;

    tracing::debug!(
        instance = %instance.name,
        query = %text,
        mapped = identity_map.len(),
        "compiled verification query"
    );

    Ok(VerificationQuery {
        text,
        instance,
        identity_map,
    })
}

/// Compile several formulas against the same instance.
///
/// Each compilation is independent: its own rendering pass, its own
/// identity map. Results come back in input order.
pub fn compile_batch(
    model: &StatechartModel,
    formulas: &[PropertyFormula],
    instance: &StatechartInstance,
    flattener: Option<&dyn Flattener>,
    lowering: &dyn PredicateLowering,
) -> Vec<Result<VerificationQuery, CompileError>> {
    formulas
        .iter()
        .map(|formula| compile(model, formula, instance, flattener, lowering))
        .collect()
}

/// Ensure the instance lives in an unfolded package, flattening if needed.
fn resolve_unfolded(
    model: &StatechartModel,
    instance: &StatechartInstance,
    flattener: Option<&dyn Flattener>,
) -> Result<StatechartInstance, CompileError> {
    if derived::is_unfolded(model, &instance.component)? {
        return Ok(instance.clone());
    }

    let package = derived::containing_package(model, &instance.component)?;
    match flattener {
        Some(flattener) => {
            tracing::debug!(
                component = %instance.component,
                package = %package.name,
                "instance is folded, requesting unfolded view"
            );
            Ok(flattener.unfold(model, instance)?)
        }
        None => Err(CompileError::NotUnfolded {
            component: instance.component.clone(),
            package: package.name.clone(),
        }),
    }
}

/// Recursively render a formula into the checker's query syntax.
fn render(
    model: &StatechartModel,
    formula: &PropertyFormula,
    instance: &StatechartInstance,
    lowering: &dyn PredicateLowering,
) -> Result<String, LoweringError> {
    match formula {
        PropertyFormula::Predicate(pred) => lowering.lower(model, instance, pred),
        PropertyFormula::Unary { op, operand } => {
            let inner = render(model, operand, instance, lowering)?;
            Ok(format!("{} ({inner})", op.symbol()))
        }
        PropertyFormula::LeadsTo {
            antecedent,
            consequent,
        } => {
            // Antecedent stays on the left: swapping the arguments is a
            // different formula.
            let lhs = render(model, antecedent, instance, lowering)?;
            let rhs = render(model, consequent, instance, lowering)?;
            Ok(format!("({lhs}) {} ({rhs})", TemporalOperator::LeadsTo.symbol()))
        }
    }
}
