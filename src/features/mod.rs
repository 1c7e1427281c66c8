//! Feature schema and model-ready feature vectors
//!
//! The trained model expects an exact, ordered list of feature names. The
//! schema owns that list; projection turns an inbound value map into a
//! vector aligned to it, rejecting missing or non-numeric values and
//! silently dropping extras.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Result, ScorerError};

/// Ordered, versioned list of the feature names the model was trained on
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawFeatureSchema")]
pub struct FeatureSchema {
    version: String,
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

/// On-disk shape of the feature-list artifact
#[derive(Debug, Deserialize)]
struct RawFeatureSchema {
    version: String,
    features: Vec<String>,
}

impl TryFrom<RawFeatureSchema> for FeatureSchema {
    type Error = ScorerError;

    fn try_from(raw: RawFeatureSchema) -> Result<Self> {
        Self::new(raw.version, raw.features)
    }
}

impl FeatureSchema {
    /// Create a schema from an ordered name list.
    ///
    /// Fails with a validation error if the list is empty or contains
    /// duplicate names.
    pub fn new(version: impl Into<String>, names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(ScorerError::validation("feature list is empty"));
        }

        let mut index = FxHashMap::default();
        for (position, name) in names.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(ScorerError::validation(format!(
                    "duplicate feature name: {name}"
                )));
            }
        }

        Ok(Self {
            version: version.into(),
            names,
            index,
        })
    }

    /// Artifact version string
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Feature names in model order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of features the model expects
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema is empty (never true for a constructed schema)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a feature name in model order, if present
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Project a value map onto the schema, producing a model-ready vector.
    ///
    /// Every schema name must be present with a finite value; entries not
    /// named by the schema are dropped.
    pub fn project(&self, values: &FxHashMap<String, f64>) -> Result<FeatureVector> {
        let mut projected = Vec::with_capacity(self.names.len());

        for name in &self.names {
            let value = values.get(name).ok_or_else(|| {
                ScorerError::validation(format!("missing required feature: {name}"))
            })?;

            if !value.is_finite() {
                return Err(ScorerError::validation(format!(
                    "feature {name} has a non-numeric value"
                )));
            }

            projected.push(*value);
        }

        Ok(FeatureVector { values: projected })
    }
}

/// Feature values aligned to a schema's order, ready for inference
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Values in model order
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the vector
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
