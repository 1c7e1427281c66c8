//! Tests for the tree ensemble and the artifact loaders

mod common;

use std::fs;

use ckd_scorer::artifacts::{self, DecisionTree, TreeEnsemble, TreeNode};
use ckd_scorer::ScorerError;
use common::{fixture_ensemble, shipped_artifact};

#[test]
fn margin_and_probability_for_known_paths() {
    let ensemble = fixture_ensemble();

    // sc=2.0 routes tree A to +1.5; hemo=9, al=3 route tree B to +1.0
    let sick = [2.0, 9.0, 3.0, 1.0];
    let margin = ensemble.margin(&sick).expect("valid width");
    assert!((margin - 2.5).abs() < 1e-12);

    let probability = ensemble.predict_proba(&sick).expect("valid width");
    assert!((probability - 1.0 / (1.0 + (-2.5_f64).exp())).abs() < 1e-12);

    // sc=0.9 routes tree A to -1.0; hemo=15 routes tree B to -0.8
    let healthy = [0.9, 15.0, 0.0, 0.0];
    let margin = ensemble.margin(&healthy).expect("valid width");
    assert!((margin + 1.8).abs() < 1e-12);
}

#[test]
fn decision_path_visits_expected_nodes() {
    let ensemble = fixture_ensemble();
    let tree_b = &ensemble.trees[1];

    let path = tree_b.decision_path(&[2.0, 9.0, 3.0, 1.0]).expect("valid input");
    assert_eq!(path, vec![0, 1, 4], "hemo < 12, then al >= 0.5");

    let path = tree_b.decision_path(&[0.9, 15.0, 0.0, 0.0]).expect("valid input");
    assert_eq!(path, vec![0, 2], "hemo >= 12 goes straight to the right leaf");
}

#[test]
fn expected_values_are_cover_weighted_means() {
    let ensemble = fixture_ensemble();

    let expected_a = ensemble.trees[0].expected_values();
    assert!((expected_a[0] - 0.0).abs() < 1e-12, "(60*-1.0 + 40*1.5) / 100");

    let expected_b = ensemble.trees[1].expected_values();
    assert!((expected_b[1] - 0.68).abs() < 1e-12, "(20*0.2 + 30*1.0) / 50");
    assert!((expected_b[0] - -0.06).abs() < 1e-12, "(50*0.68 + 50*-0.8) / 100");
}

#[test]
fn margin_rejects_wrong_vector_width() {
    let ensemble = fixture_ensemble();
    assert!(matches!(
        ensemble.margin(&[1.0, 2.0]),
        Err(ScorerError::Inference(_))
    ));
}

#[test]
fn validation_catches_structural_defects() {
    let mut ensemble = fixture_ensemble();
    ensemble.trees.clear();
    assert!(ensemble.validate().is_err(), "no trees");

    let backward_child = TreeEnsemble {
        version: "bad".to_string(),
        n_features: 1,
        base_score: 0.0,
        trees: vec![DecisionTree {
            nodes: vec![
                TreeNode::Leaf { value: 0.0, cover: 1.0 },
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.5,
                    left: 0,
                    right: 0,
                    cover: 1.0,
                },
            ],
        }],
    };
    assert!(backward_child.validate().is_err(), "children must point forward");

    let bad_feature = TreeEnsemble {
        version: "bad".to_string(),
        n_features: 1,
        base_score: 0.0,
        trees: vec![DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 7,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                    cover: 1.0,
                },
                TreeNode::Leaf { value: 0.0, cover: 1.0 },
                TreeNode::Leaf { value: 0.0, cover: 1.0 },
            ],
        }],
    };
    assert!(bad_feature.validate().is_err(), "feature index out of range");

    let zero_cover = TreeEnsemble {
        version: "bad".to_string(),
        n_features: 1,
        base_score: 0.0,
        trees: vec![DecisionTree {
            nodes: vec![TreeNode::Leaf { value: 0.0, cover: 0.0 }],
        }],
    };
    assert!(zero_cover.validate().is_err(), "cover must be positive");
}

#[test]
fn shipped_artifacts_load_and_agree() {
    let ensemble = artifacts::load_ensemble(&shipped_artifact("ckd_model.json"))
        .expect("shipped model loads");
    let schema = artifacts::load_feature_schema(&shipped_artifact("selected_features.json"))
        .expect("shipped feature list loads");

    assert_eq!(
        ensemble.n_features,
        schema.len(),
        "shipped artifacts must agree on feature count"
    );
    assert!(!ensemble.trees.is_empty());
}

#[test]
fn missing_artifact_is_a_fatal_model_load_error() {
    let path = std::env::temp_dir().join("ckd-scorer-no-such-artifact.json");
    let error = artifacts::load_ensemble(&path).expect_err("file does not exist");

    assert!(error.is_fatal());
    match error {
        ScorerError::ModelLoad { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected model load error, got {other:?}"),
    }
}

#[test]
fn malformed_artifact_is_a_model_load_error() {
    let path = std::env::temp_dir().join("ckd-scorer-malformed-model.json");
    fs::write(&path, "{ not json").expect("temp file is writable");

    let error = artifacts::load_ensemble(&path).expect_err("malformed JSON");
    assert!(matches!(error, ScorerError::ModelLoad { .. }));

    // Structurally invalid but well-formed JSON also fails the load
    fs::write(
        &path,
        r#"{"version":"v","n_features":0,"base_score":0.0,"trees":[]}"#,
    )
    .expect("temp file is writable");
    let error = artifacts::load_ensemble(&path).expect_err("invalid structure");
    assert!(matches!(error, ScorerError::ModelLoad { .. }));

    let _ = fs::remove_file(&path);
}
