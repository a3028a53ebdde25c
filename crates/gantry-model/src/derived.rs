//! Derived structural queries over the statechart model.
//!
//! All queries are pure upward traversals through ownership links.
//! The source model may be edited between verification runs, so nothing
//! is cached; every fact is recomputed per call.

use crate::statechart::{Component, ComponentKind, Package, StatechartModel};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DerivedError {
    #[error("Component '{component}' is not declared in the model")]
    UnknownComponent { component: String },

    #[error("Component '{component}' references package '{package}' which is not in the model")]
    UnresolvedContainer { component: String, package: String },
}

/// Resolve the package owning `component`.
pub fn containing_package<'a>(
    model: &'a StatechartModel,
    component: &str,
) -> Result<&'a Package, DerivedError> {
    let comp = model
        .component(component)
        .ok_or_else(|| DerivedError::UnknownComponent {
            component: component.to_string(),
        })?;
    model
        .package(&comp.package)
        .ok_or_else(|| DerivedError::UnresolvedContainer {
            component: comp.name.clone(),
            package: comp.package.clone(),
        })
}

/// Whether `component` lives in an unfolded (flattened) package.
pub fn is_unfolded(model: &StatechartModel, component: &str) -> Result<bool, DerivedError> {
    containing_package(model, component).map(|pkg| pkg.unfolded)
}

/// Strategy-parameterized variant of [`is_unfolded`].
///
/// `resolve` supplies the component-to-package link, letting callers with a
/// different containment source (a flattened view, a test double) reuse the
/// same predicate.
pub fn is_unfolded_with<'a, F>(resolve: F, component: &Component) -> Result<bool, DerivedError>
where
    F: Fn(&Component) -> Option<&'a Package>,
{
    resolve(component)
        .map(|pkg| pkg.unfolded)
        .ok_or_else(|| DerivedError::UnresolvedContainer {
            component: component.name.clone(),
            package: component.package.clone(),
        })
}

/// Whether a component is a composition rather than a leaf statechart.
pub fn is_composite(component: &Component) -> bool {
    component.kind == ComponentKind::Composite
}
