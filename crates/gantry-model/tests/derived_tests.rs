use std::collections::HashMap;

use gantry_model::derived::{
    containing_package, is_composite, is_unfolded, is_unfolded_with, DerivedError,
};
use gantry_model::statechart::{Component, ComponentKind, Package, StatechartModel};

fn component(name: &str, package: &str, kind: ComponentKind) -> Component {
    Component {
        name: name.to_string(),
        package: package.to_string(),
        kind,
        ports: HashMap::new(),
        states: HashMap::new(),
        transitions: Vec::new(),
        variables: Vec::new(),
    }
}

fn setup() -> StatechartModel {
    let mut model = StatechartModel::new();
    model.packages.insert(
        "traffic".to_string(),
        Package {
            name: "traffic".to_string(),
            unfolded: false,
        },
    );
    model.packages.insert(
        "traffic_unfolded".to_string(),
        Package {
            name: "traffic_unfolded".to_string(),
            unfolded: true,
        },
    );
    model.components.insert(
        "Crossroad".to_string(),
        component("Crossroad", "traffic", ComponentKind::Composite),
    );
    model.components.insert(
        "CrossroadFlat".to_string(),
        component("CrossroadFlat", "traffic_unfolded", ComponentKind::Statechart),
    );
    model.components.insert(
        "Orphan".to_string(),
        component("Orphan", "missing_pkg", ComponentKind::Statechart),
    );
    model
}

#[test]
fn test_containing_package_follows_ownership_link() {
    let model = setup();
    let pkg = containing_package(&model, "Crossroad").unwrap();
    assert_eq!(pkg.name, "traffic");
}

#[test]
fn test_unknown_component_is_reported_with_its_name() {
    let model = setup();
    let err = containing_package(&model, "Nope").unwrap_err();
    assert_eq!(
        err,
        DerivedError::UnknownComponent {
            component: "Nope".to_string()
        }
    );
}

#[test]
fn test_dangling_package_link_is_an_unresolved_container() {
    let model = setup();
    let err = containing_package(&model, "Orphan").unwrap_err();
    assert_eq!(
        err,
        DerivedError::UnresolvedContainer {
            component: "Orphan".to_string(),
            package: "missing_pkg".to_string(),
        }
    );
}

#[test]
fn test_is_unfolded_reads_the_package_flag() {
    let model = setup();
    assert_eq!(is_unfolded(&model, "Crossroad"), Ok(false));
    assert_eq!(is_unfolded(&model, "CrossroadFlat"), Ok(true));
}

#[test]
fn test_is_unfolded_with_custom_resolver() {
    let model = setup();
    let comp = model.component("Crossroad").unwrap();

    // Resolver that routes every component to the unfolded package,
    // standing in for a flattened containment view.
    let resolve = |_: &Component| model.package("traffic_unfolded");
    assert_eq!(is_unfolded_with(resolve, comp), Ok(true));

    let resolve_none = |_: &Component| None;
    assert!(matches!(
        is_unfolded_with(resolve_none, comp),
        Err(DerivedError::UnresolvedContainer { .. })
    ));
}

#[test]
fn test_is_composite_distinguishes_component_kinds() {
    let model = setup();
    assert!(is_composite(model.component("Crossroad").unwrap()));
    assert!(!is_composite(model.component("CrossroadFlat").unwrap()));
}
