//! Tests for the feature schema and projection

mod common;

use ckd_scorer::{FeatureSchema, ScorerError};
use common::{fixture_schema, sick_patient};

#[test]
fn schema_rejects_empty_feature_list() {
    let result = FeatureSchema::new("v1", vec![]);
    assert!(matches!(result, Err(ScorerError::Validation(_))));
}

#[test]
fn schema_rejects_duplicate_names() {
    let result = FeatureSchema::new(
        "v1",
        vec!["sc".to_string(), "hemo".to_string(), "sc".to_string()],
    );

    match result {
        Err(ScorerError::Validation(message)) => {
            assert!(message.contains("sc"), "message should name the duplicate");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn projection_follows_schema_order_and_drops_extras() {
    let schema = fixture_schema();
    // The patient map carries all twelve clinical codes; only the four the
    // schema names survive, in schema order.
    let values = sick_patient().feature_values();
    assert!(values.len() > schema.len());

    let vector = schema.project(&values).expect("all features present");

    assert_eq!(vector.len(), 4);
    assert_eq!(vector.values(), &[2.0, 9.0, 3.0, 1.0]);
}

#[test]
fn projection_fails_on_missing_feature() {
    let schema = fixture_schema();
    let mut values = sick_patient().feature_values();
    values.remove("hemo");

    match schema.project(&values) {
        Err(ScorerError::Validation(message)) => {
            assert!(
                message.contains("hemo"),
                "message should name the missing feature: {message}"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn projection_fails_on_non_numeric_value() {
    let schema = fixture_schema();
    let mut values = sick_patient().feature_values();
    values.insert("al".to_string(), f64::NAN);

    assert!(matches!(
        schema.project(&values),
        Err(ScorerError::Validation(_))
    ));

    values.insert("al".to_string(), f64::INFINITY);
    assert!(matches!(
        schema.project(&values),
        Err(ScorerError::Validation(_))
    ));
}

#[test]
fn schema_lookup() {
    let schema = fixture_schema();

    assert_eq!(schema.len(), 4);
    assert_eq!(schema.position("sc"), Some(0));
    assert_eq!(schema.position("htn"), Some(3));
    assert_eq!(schema.position("bu"), None);
    assert_eq!(schema.version(), "test-features-1");
}

#[test]
fn patient_record_encodes_sex_numerically() {
    let values = sick_patient().feature_values();
    assert_eq!(values.get("sex"), Some(&1.0));

    let values = common::healthy_patient().feature_values();
    assert_eq!(values.get("sex"), Some(&0.0));
}
