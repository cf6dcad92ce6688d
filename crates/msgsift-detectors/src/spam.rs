//! Spam detector
//!
//! Fuses the keyword heuristic with the trained model: either signal alone
//! is sufficient for a positive. The two signals are independent, so a
//! degraded model leaves the keyword heuristic as the sole signal rather
//! than disabling the domain.

use crate::detector::Detector;
use crate::gate::{self, Gate};
use crate::keywords::KeywordScorer;
use crate::model::ModelScorer;
use crate::registry::ModelRegistry;
use async_trait::async_trait;
use msgsift_core::{Domain, Result, SpamVerdict};
use tracing::info;

/// Distinct keyword hits at or above this count classify as spam on their own
pub const SPAM_KEYWORD_THRESHOLD: usize = 2;

/// Keyword-plus-model spam detector
pub struct SpamDetector {
    name: String,
    keywords: KeywordScorer,
    model: ModelScorer,
}

impl SpamDetector {
    /// Build a detector against the given registry.
    ///
    /// The registry is only read during construction; the detector holds
    /// its own handle to the loaded model.
    pub fn new(registry: &ModelRegistry) -> Result<Self> {
        Ok(Self {
            name: "spam".to_string(),
            keywords: KeywordScorer::spam()?,
            model: ModelScorer::new(Domain::Spam, registry.model(Domain::Spam)),
        })
    }
}

#[async_trait]
impl Detector for SpamDetector {
    type Verdict = SpamVerdict;

    async fn detect(&self, text: &str) -> SpamVerdict {
        let text = match gate::check(text) {
            Gate::Insufficient => return SpamVerdict::InsufficientText,
            Gate::Valid(trimmed) => trimmed,
        };

        let keyword_hits = self.keywords.score(text);
        let model_verdict = self.model.predict_or_default(text);

        info!(keyword_hits, model_verdict, "spam signals");

        if keyword_hits >= SPAM_KEYWORD_THRESHOLD || model_verdict {
            SpamVerdict::Spam
        } else {
            SpamVerdict::NotSpam
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
