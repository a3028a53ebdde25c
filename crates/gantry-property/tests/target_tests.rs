use std::collections::HashMap;

use gantry_model::derived::DerivedError;
use gantry_model::statechart::{Component, ComponentKind, Package, StatechartModel};
use gantry_property::target::is_target_unfolded;

fn setup() -> StatechartModel {
    let mut model = StatechartModel::new();
    model.packages.insert(
        "flat".to_string(),
        Package {
            name: "flat".to_string(),
            unfolded: true,
        },
    );
    model.components.insert(
        "Pump".to_string(),
        Component {
            name: "Pump".to_string(),
            package: "flat".to_string(),
            kind: ComponentKind::Statechart,
            ports: HashMap::new(),
            states: HashMap::new(),
            transitions: Vec::new(),
            variables: Vec::new(),
        },
    );
    model
}

#[test]
fn test_target_in_unfolded_package_is_unfolded() {
    let model = setup();
    assert_eq!(is_target_unfolded(&model, "Pump"), Ok(true));
}

#[test]
fn test_missing_target_surfaces_the_structural_error() {
    let model = setup();
    assert_eq!(
        is_target_unfolded(&model, "Valve"),
        Err(DerivedError::UnknownComponent {
            component: "Valve".to_string()
        })
    );
}
