//! Shared fixtures for integration tests
//!
//! The fixture ensemble is small enough to verify by hand: two trees over
//! four features with a zero base score. Expected node values, margins and
//! probabilities used in assertions were computed from these definitions.

use std::path::PathBuf;
use std::sync::Arc;

use ckd_scorer::artifacts::{DecisionTree, TreeEnsemble, TreeNode};
use ckd_scorer::models::Sex;
use ckd_scorer::{CkdScorer, FeatureSchema, ModelAdapter, PatientRecord, TreeExplainer};

/// Schema the fixture ensemble was "trained" on
pub fn fixture_schema() -> FeatureSchema {
    FeatureSchema::new(
        "test-features-1",
        vec![
            "sc".to_string(),
            "hemo".to_string(),
            "al".to_string(),
            "htn".to_string(),
        ],
    )
    .expect("fixture schema is valid")
}

/// Two hand-built trees; see module docs for the derived expected values
pub fn fixture_ensemble() -> TreeEnsemble {
    let tree_a = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 0,
                threshold: 1.3,
                left: 1,
                right: 2,
                cover: 100.0,
            },
            TreeNode::Leaf {
                value: -1.0,
                cover: 60.0,
            },
            TreeNode::Leaf {
                value: 1.5,
                cover: 40.0,
            },
        ],
    };

    let tree_b = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 1,
                threshold: 12.0,
                left: 1,
                right: 2,
                cover: 100.0,
            },
            TreeNode::Split {
                feature: 2,
                threshold: 0.5,
                left: 3,
                right: 4,
                cover: 50.0,
            },
            TreeNode::Leaf {
                value: -0.8,
                cover: 50.0,
            },
            TreeNode::Leaf {
                value: 0.2,
                cover: 20.0,
            },
            TreeNode::Leaf {
                value: 1.0,
                cover: 30.0,
            },
        ],
    };

    TreeEnsemble {
        version: "test-model-1".to_string(),
        n_features: 4,
        base_score: 0.0,
        trees: vec![tree_a, tree_b],
    }
}

/// Assemble a scorer from the fixtures, bypassing file IO
pub fn fixture_scorer() -> CkdScorer {
    let schema = Arc::new(fixture_schema());
    let ensemble = Arc::new(fixture_ensemble());

    let model = ModelAdapter::new(Arc::clone(&ensemble), Arc::clone(&schema))
        .expect("fixture widths agree");
    let explainer =
        TreeExplainer::new(ensemble, Arc::clone(&schema)).expect("fixture widths agree");

    CkdScorer::new(schema, model, explainer)
}

/// Patient whose values route to the high-risk leaves of both trees
pub fn sick_patient() -> PatientRecord {
    PatientRecord {
        age: 62,
        sex: Sex::Male,
        specific_gravity: 1.010,
        albumin: 3.0,
        blood_glucose_random: 180.0,
        serum_creatinine: 2.0,
        sodium: 135.0,
        hemoglobin: 9.0,
        packed_cell_volume: 29.0,
        red_blood_cell_count: 3.4,
        hypertension: 1,
        diabetes_mellitus: 1,
    }
}

/// Patient whose values route to the low-risk leaves of both trees
pub fn healthy_patient() -> PatientRecord {
    PatientRecord {
        age: 40,
        sex: Sex::Female,
        specific_gravity: 1.020,
        albumin: 0.0,
        blood_glucose_random: 100.0,
        serum_creatinine: 0.9,
        sodium: 140.0,
        hemoglobin: 15.0,
        packed_cell_volume: 44.0,
        red_blood_cell_count: 5.2,
        hypertension: 0,
        diabetes_mellitus: 0,
    }
}

/// Path to a shipped artifact relative to the crate root
pub fn shipped_artifact(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("ml_models")
        .join(name)
}
