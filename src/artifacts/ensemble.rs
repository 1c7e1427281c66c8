//! Gradient-boosted tree ensemble
//!
//! Concrete realization of the opaque trained classifier: an additive
//! ensemble of binary decision trees on the margin (log-odds) scale, as
//! produced by standard boosting trainers. The ensemble is deserialized
//! from its artifact once at startup, structurally validated, and treated
//! as read-only for the process lifetime.

use serde::Deserialize;

use crate::error::{Result, ScorerError};

/// One node of a decision tree.
///
/// Nodes are stored in a flat vector with the root at index 0; children
/// always sit at larger indices than their parent.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal decision node
    Split {
        /// Index of the feature tested, in schema order
        feature: usize,
        /// Decision threshold; values strictly below go left
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
        /// Training-set weight that reached this node
        cover: f64,
    },
    /// Terminal node
    Leaf {
        /// Margin-scale value added to the ensemble score
        value: f64,
        /// Training-set weight that reached this leaf
        cover: f64,
    },
}

impl TreeNode {
    /// Training-set weight that reached this node
    #[must_use]
    pub const fn cover(&self) -> f64 {
        match self {
            Self::Split { cover, .. } | Self::Leaf { cover, .. } => *cover,
        }
    }
}

/// A single decision tree in flat-array form
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    /// Nodes in index order, root first
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree for one feature vector, returning the indices of the
    /// nodes visited from root to leaf.
    pub fn decision_path(&self, features: &[f64]) -> Result<Vec<usize>> {
        let mut path = Vec::new();
        let mut current = 0usize;

        // A valid tree reaches a leaf in at most nodes.len() steps; the
        // bound turns a malformed cyclic tree into an error instead of a
        // hang.
        for _ in 0..=self.nodes.len() {
            path.push(current);
            let node = self
                .nodes
                .get(current)
                .ok_or_else(|| ScorerError::inference(format!("node index {current} out of range")))?;

            match node {
                TreeNode::Leaf { .. } => return Ok(path),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    let value = features.get(*feature).ok_or_else(|| {
                        ScorerError::inference(format!("feature index {feature} out of range"))
                    })?;
                    current = if *value < *threshold { *left } else { *right };
                }
            }
        }

        Err(ScorerError::inference(
            "decision path exceeded the node count; tree is cyclic".to_string(),
        ))
    }

    /// Margin contribution of this tree for one feature vector
    pub fn score(&self, features: &[f64]) -> Result<f64> {
        let path = self.decision_path(features)?;
        let last = path.last().copied().unwrap_or(0);
        match &self.nodes[last] {
            TreeNode::Leaf { value, .. } => Ok(*value),
            TreeNode::Split { .. } => Err(ScorerError::inference(
                "decision path terminated on a split node".to_string(),
            )),
        }
    }

    fn validate(&self, tree_index: usize, n_features: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree_index} has no nodes"));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if node.cover() <= 0.0 || !node.cover().is_finite() {
                return Err(format!("tree {tree_index} node {i} has non-positive cover"));
            }

            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "tree {tree_index} node {i} tests feature {feature}, model has {n_features}"
                    ));
                }
                if !threshold.is_finite() {
                    return Err(format!("tree {tree_index} node {i} has a non-finite threshold"));
                }
                // Forward-pointing children guarantee the tree is acyclic
                // and let expected values be computed in one reverse pass.
                for child in [*left, *right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(format!(
                            "tree {tree_index} node {i} has invalid child index {child}"
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Cover-weighted expected value of every node, computed bottom-up.
    ///
    /// A leaf's expected value is its own value; an internal node's is the
    /// cover-weighted mean of its children. Used by the path attribution.
    #[must_use]
    pub fn expected_values(&self) -> Vec<f64> {
        let mut expected = vec![0.0; self.nodes.len()];

        for (i, node) in self.nodes.iter().enumerate().rev() {
            expected[i] = match node {
                TreeNode::Leaf { value, .. } => *value,
                TreeNode::Split { left, right, .. } => {
                    let (l, r) = (&self.nodes[*left], &self.nodes[*right]);
                    let total = l.cover() + r.cover();
                    (l.cover() * expected[*left] + r.cover() * expected[*right]) / total
                }
            };
        }

        expected
    }
}

/// Trained binary classifier: a versioned boosted-tree ensemble
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsemble {
    /// Artifact version string
    pub version: String,
    /// Number of features the ensemble was trained on
    pub n_features: usize,
    /// Margin-scale intercept added to every score
    pub base_score: f64,
    /// Additive trees
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    /// Structurally validate the deserialized ensemble.
    ///
    /// Returns a description of the first defect found, if any. Called once
    /// at load time so per-request scoring can trust node and feature
    /// indices.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.n_features == 0 {
            return Err("model expects zero features".to_string());
        }
        if self.trees.is_empty() {
            return Err("model contains no trees".to_string());
        }
        if !self.base_score.is_finite() {
            return Err("base score is not finite".to_string());
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features)?;
        }

        Ok(())
    }

    /// Raw margin (log-odds) for one feature vector
    pub fn margin(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(ScorerError::inference(format!(
                "feature vector has {} values, model expects {}",
                features.len(),
                self.n_features
            )));
        }

        let mut margin = self.base_score;
        for tree in &self.trees {
            margin += tree.score(features)?;
        }
        Ok(margin)
    }

    /// Estimated probability of the positive class for one feature vector
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        Ok(sigmoid(self.margin(features)?))
    }
}

/// Logistic link mapping a margin to a probability in [0, 1]
#[must_use]
pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}
