use gantry_model::port::{
    canonical_port_name, is_turned_out, marker_for, turned_out_name, PortNameError,
    ScenarioMarker, ACCEPT_STATE, COLD_VIOLATION_STATE, HOT_VIOLATION_STATE, INITIAL_STATE,
};

#[test]
fn test_plain_name_is_not_turned_out() {
    assert!(!is_turned_out("DataOut"));
    assert!(is_turned_out("DataOutReversed"));
}

#[test]
fn test_turned_out_name_toggles_suffix() {
    assert_eq!(turned_out_name("DataOut"), "DataOutReversed");
    assert_eq!(turned_out_name("DataOutReversed"), "DataOut");
}

#[test]
fn test_turned_out_name_is_involution_on_clean_names() {
    for name in ["DataOut", "Control", "p"] {
        assert_eq!(turned_out_name(&turned_out_name(name)), name);
        assert!(is_turned_out(&turned_out_name(name)));
    }
}

#[test]
fn test_canonical_name_strips_one_suffix_layer() {
    assert_eq!(canonical_port_name("DataOut"), Ok("DataOut"));
    assert_eq!(canonical_port_name("DataOutReversed"), Ok("DataOut"));
}

#[test]
fn test_canonical_name_flags_double_suffix_as_ambiguous() {
    let err = canonical_port_name("DataReversedReversed").unwrap_err();
    assert_eq!(
        err,
        PortNameError::AmbiguousSuffix {
            name: "DataReversedReversed".to_string()
        }
    );
}

#[test]
fn test_marker_constants_resolve_to_their_markers() {
    assert_eq!(
        marker_for(COLD_VIOLATION_STATE),
        Some(ScenarioMarker::ColdViolation)
    );
    assert_eq!(
        marker_for(HOT_VIOLATION_STATE),
        Some(ScenarioMarker::HotViolation)
    );
    assert_eq!(marker_for(ACCEPT_STATE), Some(ScenarioMarker::Accept));
    assert_eq!(marker_for(INITIAL_STATE), Some(ScenarioMarker::Initial));
    assert_eq!(marker_for("Idle"), None);
}
