//! Tree-path feature attribution
//!
//! The explainer is bound to the same ensemble as the model adapter when the
//! artifacts are loaded; the pairing is load-time state. For each input it
//! walks every tree's decision path and credits the change in the
//! cover-weighted expected value at each split to the feature tested there.
//! The attributions satisfy baseline + sum(contributions) = margin exactly,
//! so explanations are on the same scale the classifier scores on.

use std::sync::Arc;

use super::Attributor;
use crate::artifacts::{DecisionTree, TreeEnsemble, TreeNode};
use crate::error::{Result, ScorerError};
use crate::features::{FeatureSchema, FeatureVector};

/// Signed contribution of one feature to the positive-class score
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureAttribution {
    /// Feature name, from the model's schema
    pub feature: String,
    /// Margin-scale contribution; positive values push toward the
    /// positive class
    pub contribution: f64,
}

/// Per-feature attributions for a single prediction
#[derive(Debug, Clone, PartialEq)]
pub struct AttributionRecord {
    /// Expected model output before any feature is observed
    pub baseline: f64,
    /// One entry per feature, in schema order
    pub entries: Vec<FeatureAttribution>,
}

/// Attribution engine for boosted-tree ensembles.
///
/// Per-node expected values are precomputed once at construction so each
/// request only pays for the root-to-leaf walks.
#[derive(Debug, Clone)]
pub struct TreeExplainer {
    ensemble: Arc<TreeEnsemble>,
    schema: Arc<FeatureSchema>,
    // expected_values[t][n] is the cover-weighted expected output of node n
    // in tree t
    expected_values: Vec<Vec<f64>>,
}

impl TreeExplainer {
    /// Build an explainer for the given ensemble and schema.
    ///
    /// Must be constructed from the same ensemble handle as the model
    /// adapter; the width check guards against pairing mistakes.
    pub fn new(ensemble: Arc<TreeEnsemble>, schema: Arc<FeatureSchema>) -> Result<Self> {
        if ensemble.n_features != schema.len() {
            return Err(ScorerError::inference(format!(
                "explainer schema lists {} features, model expects {}",
                schema.len(),
                ensemble.n_features
            )));
        }

        let expected_values = ensemble
            .trees
            .iter()
            .map(DecisionTree::expected_values)
            .collect();

        Ok(Self {
            ensemble,
            schema,
            expected_values,
        })
    }

    /// Expected model margin with no features observed
    #[must_use]
    pub fn baseline(&self) -> f64 {
        let roots: f64 = self
            .expected_values
            .iter()
            .map(|ev| ev.first().copied().unwrap_or(0.0))
            .sum();
        self.ensemble.base_score + roots
    }
}

impl Attributor for TreeExplainer {
    fn attribute(&self, features: &FeatureVector) -> Result<AttributionRecord> {
        if features.len() != self.ensemble.n_features {
            return Err(ScorerError::inference(format!(
                "feature vector has {} values, explainer expects {}",
                features.len(),
                self.ensemble.n_features
            )));
        }

        let mut contributions = vec![0.0; self.schema.len()];

        for (tree, expected) in self.ensemble.trees.iter().zip(&self.expected_values) {
            let path = tree.decision_path(features.values())?;

            for pair in path.windows(2) {
                let (node, child) = (pair[0], pair[1]);
                if let TreeNode::Split { feature, .. } = &tree.nodes[node] {
                    contributions[*feature] += expected[child] - expected[node];
                }
            }
        }

        let entries = self
            .schema
            .names()
            .iter()
            .zip(contributions)
            .map(|(feature, contribution)| FeatureAttribution {
                feature: feature.clone(),
                contribution,
            })
            .collect();

        Ok(AttributionRecord {
            baseline: self.baseline(),
            entries,
        })
    }
}
