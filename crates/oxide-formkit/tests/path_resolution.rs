//! Tests for property path resolution over form models.

mod common;
use common::*;

use oxide_formkit::{describe, resolve, FormError, Value, ValueKind};

fn root() -> Value {
    Value::record(FormWithNestedStructures::new())
}

#[test]
fn resolves_bracketed_map_path() {
    assert_eq!(
        resolve(&root(), "array[nested][value]").unwrap(),
        Value::from("x")
    );
}

#[test]
fn resolves_dotted_and_bracketed_forms_alike() {
    let root = root();
    assert_eq!(
        resolve(&root, "array.nested.other").unwrap(),
        resolve(&root, "array[nested][other]").unwrap()
    );
}

#[test]
fn resolves_record_field() {
    assert_eq!(
        resolve(&root(), "coordinates[latitude]").unwrap(),
        Value::Float(50.45)
    );
}

#[test]
fn resolves_list_element() {
    assert_eq!(
        resolve(&root(), "dates[1]").unwrap(),
        Value::from("2024-02-01")
    );
}

#[test]
fn describes_mixed_trail() {
    assert_eq!(
        describe(&root(), "coordinates.latitude").unwrap(),
        "coordinates::latitude"
    );
    assert_eq!(
        describe(&root(), "array[nested][value]").unwrap(),
        "array[nested][value]"
    );
    assert_eq!(describe(&root(), "dates.0").unwrap(), "dates[0]");
}

#[test]
fn missing_record_field() {
    let err = resolve(&root(), "coordinates.altitude").unwrap_err();
    match err {
        FormError::UndefinedField { path, type_name } => {
            assert_eq!(path, "coordinates::altitude");
            assert_eq!(type_name, "Coordinates");
        }
        other => panic!("expected UndefinedField, got {other:?}"),
    }
}

#[test]
fn static_record_field() {
    let err = resolve(&root(), "coordinates.precision").unwrap_err();
    assert!(matches!(err, FormError::StaticField { ref type_name, .. } if type_name == "Coordinates"));

    let err = resolve(&root(), "formName").unwrap_err();
    assert_eq!(err.path(), Some("formName"));
}

#[test]
fn missing_list_element() {
    let err = resolve(&root(), "dates[5]").unwrap_err();
    assert!(matches!(err, FormError::UndefinedElement { ref path } if path == "dates[5]"));
}

#[test]
fn leaf_overrun() {
    let err = resolve(&root(), "title.length").unwrap_err();
    match err {
        FormError::NotNestable {
            path,
            segment,
            kind,
        } => {
            assert_eq!(path, "title");
            assert_eq!(segment, "length");
            assert_eq!(kind, ValueKind::Text);
        }
        other => panic!("expected NotNestable, got {other:?}"),
    }
}

#[test]
fn invalid_expressions() {
    for expression in ["", "title.", "array[nested]]", "a b", "title..x"] {
        assert!(
            matches!(resolve(&root(), expression), Err(FormError::InvalidPath(_))),
            "{expression:?} should be rejected"
        );
    }
}

#[test]
fn numeric_keys_are_plain_map_keys() {
    let root = Value::map([("2024", Value::map([("total", 3_i64)]))]);
    assert_eq!(resolve(&root, "2024.total").unwrap(), Value::Int(3));
}

#[test]
fn resolves_mixed_brackets_and_dots_over_list_of_maps() {
    let root = Value::from(serde_json::json!({
        "dates": [
            {"start": "2024-01-15", "end": "2024-01-20"},
            {"start": "2024-02-01", "end": "2024-02-03"},
        ]
    }));
    assert_eq!(
        resolve(&root, "dates[0].start").unwrap(),
        Value::from("2024-01-15")
    );
    assert_eq!(
        resolve(&root, "dates[1].end").unwrap(),
        Value::from("2024-02-03")
    );
    assert_eq!(describe(&root, "dates[1].end").unwrap(), "dates[1][end]");
}
