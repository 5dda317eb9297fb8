use keytape_core::{curve_to_stored_json, parse_stored_curve_json, Curve, StoredError};

#[test]
fn parse_orders_unsorted_keys() {
    let json = r#"{
        "name": "gauge",
        "cardinality": 2,
        "keys": [
            { "time": 1.0, "value": [101.0, 202.0] },
            { "time": 0.0, "value": [100.0, 200.0] },
            { "time": 2.0, "value": [102.0, 204.0] }
        ]
    }"#;

    let curve = parse_stored_curve_json(json).expect("parse");
    assert_eq!(curve.cardinality(), 2);
    assert_eq!(curve.num_keys(), 3);
    assert_eq!(curve.times(), &[0.0, 1.0, 2.0]);
    assert_eq!(curve.evaluate(1.5), Some(&[101.0, 202.0][..]));
}

#[test]
fn parse_duplicate_time_overwrites() {
    let json = r#"{
        "name": "switch",
        "cardinality": 1,
        "keys": [
            { "time": 0.0, "value": [1.0] },
            { "time": 0.0, "value": [2.0] }
        ]
    }"#;

    let curve = parse_stored_curve_json(json).expect("parse");
    assert_eq!(curve.num_keys(), 1);
    assert_eq!(curve.values(), &[2.0]);
}

#[test]
fn parse_rejects_component_count_mismatch() {
    let json = r#"{
        "name": "bad",
        "cardinality": 3,
        "keys": [ { "time": 0.0, "value": [1.0, 2.0] } ]
    }"#;

    let err = parse_stored_curve_json(json).unwrap_err();
    assert!(matches!(err, StoredError::Invalid(_)), "got {err:?}");
}

#[test]
fn parse_rejects_zero_cardinality() {
    let json = r#"{ "name": "bad", "cardinality": 0, "keys": [] }"#;

    let err = parse_stored_curve_json(json).unwrap_err();
    assert!(matches!(err, StoredError::Invalid(_)), "got {err:?}");
}

#[test]
fn parse_rejects_non_finite_time() {
    let json = r#"{
        "name": "bad",
        "cardinality": 1,
        "keys": [ { "time": 1e39, "value": [1.0] } ]
    }"#;

    let err = parse_stored_curve_json(json).unwrap_err();
    assert!(matches!(err, StoredError::Invalid(_)), "got {err:?}");
}

#[test]
fn parse_rejects_malformed_json() {
    let err = parse_stored_curve_json("{ not json").unwrap_err();
    assert!(matches!(err, StoredError::Parse(_)), "got {err:?}");
}

#[test]
fn json_round_trip() {
    let mut curve = Curve::with_capacity(2, 4).expect("alloc");
    curve.set(0.0, &[1.0, 2.0]).expect("alloc");
    curve.set(0.5, &[3.0, 4.0]).expect("alloc");
    curve.set(2.0, &[5.0, 6.0]).expect("alloc");

    let json = curve_to_stored_json(&curve, "round-trip").expect("serialize");
    let reparsed = parse_stored_curve_json(&json).expect("parse");
    assert_eq!(reparsed.cardinality(), curve.cardinality());
    assert_eq!(reparsed.times(), curve.times());
    assert_eq!(reparsed.values(), curve.values());
}
