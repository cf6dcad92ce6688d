//! Versioned model artifact format
//!
//! Replaces opaque pickled model blobs with an explicit JSON document:
//! a schema version header, the vectorizer vocabulary and idf table, and
//! the linear classifier weights. Loaded through a validating deserializer
//! so a corrupt or mismatched artifact fails at load time with a
//! describable error instead of crashing the process at call time.

use msgsift_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The artifact schema version this build understands
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk model artifact: one tf-idf vectorizer plus one binary linear
/// classifier for a single detection domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Must equal [`SCHEMA_VERSION`]
    pub schema_version: u32,

    /// Name of the positive class, for logs only
    pub positive_label: String,

    /// Term table; index is the feature column
    pub vocabulary: Vec<String>,

    /// Inverse-document-frequency weights, one per term
    pub idf: Vec<f32>,

    /// Linear decision weights, one per term
    pub weights: Vec<f32>,

    /// Decision intercept
    pub intercept: f32,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::artifact(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate an artifact from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()
    }

    /// Check the invariants the inference code relies on
    fn validate(self) -> Result<Self> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(Error::artifact(format!(
                "unsupported schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        if self.vocabulary.is_empty() {
            return Err(Error::artifact("empty vocabulary"));
        }
        if self.idf.len() != self.vocabulary.len() || self.weights.len() != self.vocabulary.len() {
            return Err(Error::artifact(format!(
                "table length mismatch: {} terms, {} idf values, {} weights",
                self.vocabulary.len(),
                self.idf.len(),
                self.weights.len()
            )));
        }
        let all_finite = self
            .idf
            .iter()
            .chain(self.weights.iter())
            .all(|v| v.is_finite())
            && self.intercept.is_finite();
        if !all_finite {
            return Err(Error::artifact("non-finite value in weight tables"));
        }
        Ok(self)
    }
}
