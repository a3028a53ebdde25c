use gantry_property::formula::{ArityError, PropertyFormula};
use gantry_property::operator::TemporalOperator;
use gantry_property::predicate::StatePredicate;
use gantry_property::tribool::ThreeValued;

fn in_state(state: &str) -> PropertyFormula {
    PropertyFormula::Predicate(StatePredicate::InState {
        instance: "monitor".to_string(),
        state: state.to_string(),
    })
}

const ALL_OPERATORS: [TemporalOperator; 5] = [
    TemporalOperator::MightAlways,
    TemporalOperator::MustAlways,
    TemporalOperator::MightEventually,
    TemporalOperator::MustEventually,
    TemporalOperator::LeadsTo,
];

#[test]
fn test_symbols_are_nonempty_and_distinct() {
    for op in ALL_OPERATORS {
        assert!(!op.symbol().is_empty(), "empty symbol for {op:?}");
    }
    for a in ALL_OPERATORS {
        for b in ALL_OPERATORS {
            if a != b {
                assert_ne!(a.symbol(), b.symbol(), "{a:?} and {b:?} share a symbol");
            }
        }
    }
}

#[test]
fn test_unary_apply_accepts_exactly_one_operand() {
    let built =
        PropertyFormula::apply(TemporalOperator::MustAlways, vec![in_state("Green")]).unwrap();
    assert_eq!(built.root_operator(), Some(TemporalOperator::MustAlways));

    let err = PropertyFormula::apply(
        TemporalOperator::MustAlways,
        vec![in_state("Green"), in_state("Red")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        ArityError {
            op: TemporalOperator::MustAlways,
            expected: 1,
            actual: 2,
        }
    );
}

#[test]
fn test_leads_to_apply_requires_two_operands() {
    let err = PropertyFormula::apply(TemporalOperator::LeadsTo, vec![in_state("Green")])
        .unwrap_err();
    assert_eq!(
        err,
        ArityError {
            op: TemporalOperator::LeadsTo,
            expected: 2,
            actual: 1,
        }
    );

    let built = PropertyFormula::apply(
        TemporalOperator::LeadsTo,
        vec![in_state("Request"), in_state("Grant")],
    )
    .unwrap();
    assert_eq!(built.root_operator(), Some(TemporalOperator::LeadsTo));
}

#[test]
fn test_apply_keeps_leads_to_argument_order() {
    let built = PropertyFormula::apply(
        TemporalOperator::LeadsTo,
        vec![in_state("Request"), in_state("Grant")],
    )
    .unwrap();

    let PropertyFormula::LeadsTo {
        antecedent,
        consequent,
    } = built
    else {
        panic!("expected a leads-to node");
    };
    assert_eq!(*antecedent, in_state("Request"));
    assert_eq!(*consequent, in_state("Grant"));
}

#[test]
fn test_typed_helpers_build_the_same_trees_as_apply() {
    let via_helper = PropertyFormula::must_eventually(in_state("Done"));
    let via_apply =
        PropertyFormula::apply(TemporalOperator::MustEventually, vec![in_state("Done")]).unwrap();
    assert_eq!(via_helper, via_apply);

    let via_helper = PropertyFormula::leads_to(in_state("A"), in_state("B"));
    let via_apply = PropertyFormula::apply(
        TemporalOperator::LeadsTo,
        vec![in_state("A"), in_state("B")],
    )
    .unwrap();
    assert_eq!(via_helper, via_apply);
}

#[test]
fn test_formula_parses_from_tagged_json() {
    let formula: PropertyFormula = serde_json::from_value(serde_json::json!({
        "node": "unary",
        "op": "must_always",
        "operand": {
            "node": "predicate",
            "type": "in_state",
            "instance": "monitor",
            "state": "Green"
        }
    }))
    .unwrap();

    assert_eq!(formula, PropertyFormula::must_always(in_state("Green")));
}

#[test]
fn test_opposite_swaps_definites_and_fixes_undef() {
    assert_eq!(ThreeValued::True.opposite(), ThreeValued::False);
    assert_eq!(ThreeValued::False.opposite(), ThreeValued::True);
    assert_eq!(ThreeValued::Undef.opposite(), ThreeValued::Undef);
}

#[test]
fn test_opposite_is_an_involution() {
    for x in [ThreeValued::True, ThreeValued::False, ThreeValued::Undef] {
        assert_eq!(x.opposite().opposite(), x);
    }
}

#[test]
fn test_undef_never_collapses_to_a_boolean() {
    assert_eq!(ThreeValued::Undef.to_bool(), None);
    assert!(!ThreeValued::Undef.is_definite());
    assert_eq!(ThreeValued::from(true), ThreeValued::True);
    assert_eq!(ThreeValued::from(false), ThreeValued::False);
    assert_eq!(ThreeValued::True.to_bool(), Some(true));
}
