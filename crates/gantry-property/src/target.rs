//! Structural facts about the component a property is stated against.

use gantry_model::derived::{self, DerivedError};
use gantry_model::StatechartModel;

/// Whether the property's target component lives in an unfolded package.
///
/// Properties against a folded composite need flattening before they can be
/// lowered; this predicate gates which compilation path is taken. Walks the
/// ownership link component → package on every call, no caching.
pub fn is_target_unfolded(model: &StatechartModel, component: &str) -> Result<bool, DerivedError> {
    derived::is_unfolded(model, component)
}
