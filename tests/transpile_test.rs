//! End-to-end tests over the public API: build filter trees with the
//! builders, transpile them, and check the exact spec handed downstream.

use pretty_assertions::assert_eq;
use serde_json::json;
use sift_core::prelude::*;

#[test]
fn test_realistic_filter_tree() {
    let filter = and(vec![
        ge("age", 18).unwrap(),
        or(vec![
            is_in("role", vec!["admin", "staff"]).unwrap(),
            not(is_null("verified_at").unwrap()),
        ]),
        lt("failed_logins", 5).unwrap(),
    ]);

    assert_eq!(
        serde_json::Value::Object(filter.to_spec()),
        json!({"and": [
            {"field": "age", "op": "ge", "value": 18},
            {"or": [
                {"field": "role", "op": "in", "value": ["admin", "staff"]},
                {"not": [{"field": "verified_at", "op": "is_null"}]},
            ]},
            {"field": "failed_logins", "op": "lt", "value": 5},
        ]})
    );
}

#[test]
fn test_every_operator_appears_with_its_token() {
    let filter = or(vec![
        eq("a", 1).unwrap(),
        gt("b", 2).unwrap(),
        ge("c", 3).unwrap(),
        lt("d", 4).unwrap(),
        le("e", 5).unwrap(),
        is_null("f").unwrap(),
        is_in("g", vec![6, 7]).unwrap(),
        not(eq("h", 8).unwrap()),
        and(vec![]),
    ]);

    let rendered = serde_json::to_string(&serde_json::Value::Object(filter.to_spec())).unwrap();
    for token in ["\"eq\"", "\"gt\"", "\"ge\"", "\"lt\"", "\"le\"", "\"is_null\"", "\"in\""] {
        assert!(rendered.contains(token), "missing {token} in {rendered}");
    }
    for key in ["\"or\":", "\"not\":", "\"and\":"] {
        assert!(rendered.contains(key), "missing {key} in {rendered}");
    }
}

#[test]
fn test_predicate_serde_round_trip() {
    let filter = and(vec![
        is_in("tags", vec!["red", "green", "blue"]).unwrap(),
        not(le("count", 10).unwrap()),
        or(vec![is_null("archived_at").unwrap()]),
    ]);

    let encoded = serde_json::to_string(&filter).unwrap();
    let decoded: Predicate = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, filter);
    // Round-tripping keeps the spec identical too (value order included)
    assert_eq!(decoded.to_spec(), filter.to_spec());
}

#[test]
fn test_dynamic_construction_path() {
    // The shape a request parser would take: operator tag + loose operands.
    let filter = Predicate::branch(
        BranchOp::And,
        vec![
            Predicate::leaf(LeafOp::Greater, "y", Operands::Single(Value::Int(5))).unwrap(),
            Predicate::leaf(LeafOp::Empty, "z", Operands::None).unwrap(),
        ],
    )
    .unwrap();

    assert_eq!(
        serde_json::Value::Object(filter.to_spec()),
        json!({"and": [
            {"field": "y", "op": "gt", "value": 5},
            {"field": "z", "op": "is_null"},
        ]})
    );
}

#[test]
fn test_construction_failures_surface_before_translation() {
    assert_eq!(is_null("").unwrap_err(), PredicateError::EmptyField);

    let err = Predicate::leaf(LeafOp::In, "x", Operands::Single(Value::Int(1))).unwrap_err();
    assert!(matches!(err, PredicateError::OperandMismatch { .. }));

    let err = Predicate::branch(BranchOp::Not, vec![]).unwrap_err();
    assert!(matches!(err, PredicateError::ChildMismatch { found: 0, .. }));
}
