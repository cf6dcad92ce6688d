//! Linear model inference and the per-domain model adapter
//!
//! [`LinearModel`] is the loaded form of a model artifact: a tf-idf
//! vectorizer over a fixed vocabulary feeding a binary linear classifier.
//! The decision is the sign of `w·x + intercept`, a single discrete label
//! comparison with no probability thresholding.
//!
//! [`ModelScorer`] adapts an optional loaded model for one detection
//! domain, isolating model failures from the rest of the pipeline. The
//! spam domain degrades to a quiet default-false verdict; the phishing
//! domain surfaces the failure to its caller, which maps it to the
//! `Error` label.

use crate::artifact::ModelArtifact;
use msgsift_core::{Domain, Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Tf-idf vectorizer plus binary linear classifier
pub struct LinearModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    weights: Vec<f32>,
    intercept: f32,
    positive_label: String,
}

impl LinearModel {
    /// Build an inference-ready model from a validated artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let mut vocabulary = HashMap::with_capacity(artifact.vocabulary.len());
        for (column, term) in artifact.vocabulary.iter().enumerate() {
            if vocabulary.insert(term.to_lowercase(), column).is_some() {
                return Err(Error::artifact(format!(
                    "duplicate vocabulary term: {}",
                    term
                )));
            }
        }

        Ok(Self {
            vocabulary,
            idf: artifact.idf,
            weights: artifact.weights,
            intercept: artifact.intercept,
            positive_label: artifact.positive_label,
        })
    }

    /// Name of the positive class, for logs
    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    /// Transform text into an L2-normalized tf-idf feature vector.
    ///
    /// Tokenization matches the vectorizer the artifacts are exported from:
    /// lowercase, split on non-alphanumeric boundaries, tokens shorter than
    /// two characters dropped.
    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.idf.len()];

        let lowered = text.to_lowercase();
        for token in lowered.split(|c: char| !c.is_alphanumeric()) {
            if token.chars().count() < 2 {
                continue;
            }
            if let Some(&column) = self.vocabulary.get(token) {
                features[column] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in features.iter_mut() {
                *value /= norm;
            }
        }

        features
    }

    /// Predict whether the text belongs to the positive class
    pub fn predict(&self, text: &str) -> Result<bool> {
        let features = self.vectorize(text);

        let decision = features
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum::<f32>()
            + self.intercept;

        if !decision.is_finite() {
            return Err(Error::model(format!(
                "non-finite decision value for {} model",
                self.positive_label
            )));
        }

        Ok(decision > 0.0)
    }
}

/// Per-domain adapter over an optional loaded model
pub struct ModelScorer {
    domain: Domain,
    model: Option<Arc<LinearModel>>,
}

impl ModelScorer {
    /// Create a scorer for a domain; `model` is `None` when the artifact
    /// failed to load at startup
    pub fn new(domain: Domain, model: Option<Arc<LinearModel>>) -> Self {
        Self { domain, model }
    }

    /// Whether a model is loaded for this domain
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Run the model on validated text.
    ///
    /// Errors when the model is absent or prediction fails; the failure is
    /// scoped to this call and does not poison later ones.
    pub fn predict(&self, text: &str) -> Result<bool> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| Error::model(format!("no {} model loaded", self.domain)))?;

        let verdict = model.predict(text)?;
        info!(domain = %self.domain, verdict, "model prediction");
        Ok(verdict)
    }

    /// Run the model, degrading to a false verdict on any failure.
    ///
    /// Fallback policy for the spam domain: the keyword heuristic remains
    /// the sole signal when the model cannot answer.
    pub fn predict_or_default(&self, text: &str) -> bool {
        match self.predict(text) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(domain = %self.domain, error = %e, "model unusable, defaulting to negative verdict");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::SCHEMA_VERSION;

    fn scam_model() -> LinearModel {
        let artifact = ModelArtifact {
            schema_version: SCHEMA_VERSION,
            positive_label: "spam".to_string(),
            vocabulary: vec![
                "winner".to_string(),
                "lottery".to_string(),
                "prize".to_string(),
                "meeting".to_string(),
                "agenda".to_string(),
            ],
            idf: vec![1.0; 5],
            weights: vec![1.2, 1.4, 1.1, -0.8, -0.6],
            intercept: -0.2,
        };
        LinearModel::from_artifact(artifact).unwrap()
    }

    #[test]
    fn test_positive_prediction() {
        let model = scam_model();
        assert!(model.predict("you are the lottery winner of a big prize").unwrap());
    }

    #[test]
    fn test_negative_prediction() {
        let model = scam_model();
        assert!(!model.predict("the meeting agenda is attached").unwrap());
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_intercept() {
        // Zero feature vector: decision is the intercept alone
        let model = scam_model();
        assert!(!model.predict("completely unrelated words only").unwrap());
    }

    #[test]
    fn test_duplicate_vocabulary_rejected() {
        let artifact = ModelArtifact {
            schema_version: SCHEMA_VERSION,
            positive_label: "spam".to_string(),
            vocabulary: vec!["Winner".to_string(), "winner".to_string()],
            idf: vec![1.0, 1.0],
            weights: vec![1.0, 1.0],
            intercept: 0.0,
        };
        assert!(LinearModel::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_scorer_errors_when_model_absent() {
        let scorer = ModelScorer::new(Domain::Phishing, None);
        assert!(!scorer.is_available());
        assert!(scorer.predict("any text").is_err());
    }

    #[test]
    fn test_scorer_default_policy() {
        let scorer = ModelScorer::new(Domain::Spam, None);
        assert!(!scorer.predict_or_default("any text"));

        let scorer = ModelScorer::new(Domain::Spam, Some(Arc::new(scam_model())));
        assert!(scorer.predict_or_default("lottery winner prize"));
    }
}
