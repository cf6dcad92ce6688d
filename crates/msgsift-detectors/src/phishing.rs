//! Phishing detector
//!
//! An embedded URL is a sufficient signal on its own and short-circuits
//! before the model is invoked. Without a link the model is the only
//! signal; there is no keyword fallback in this domain, so an unusable
//! model surfaces the distinguishable `Error` label instead of a silent
//! false negative.

use crate::detector::Detector;
use crate::gate::{self, Gate};
use crate::links::LinkDetector;
use crate::model::ModelScorer;
use crate::registry::ModelRegistry;
use async_trait::async_trait;
use msgsift_core::{Domain, PhishingVerdict, Result};
use tracing::{error, info};

/// Link-plus-model phishing detector
pub struct PhishingDetector {
    name: String,
    links: LinkDetector,
    model: ModelScorer,
}

impl PhishingDetector {
    /// Build a detector against the given registry
    pub fn new(registry: &ModelRegistry) -> Result<Self> {
        Ok(Self {
            name: "phishing".to_string(),
            links: LinkDetector::new()?,
            model: ModelScorer::new(Domain::Phishing, registry.model(Domain::Phishing)),
        })
    }
}

#[async_trait]
impl Detector for PhishingDetector {
    type Verdict = PhishingVerdict;

    async fn detect(&self, text: &str) -> PhishingVerdict {
        let text = match gate::check(text) {
            Gate::Insufficient => return PhishingVerdict::InsufficientText,
            Gate::Valid(trimmed) => trimmed,
        };

        if self.links.contains_link(text) {
            info!(link_found = true, "phishing signals");
            return PhishingVerdict::Phishing;
        }

        match self.model.predict(text) {
            Ok(true) => PhishingVerdict::Phishing,
            Ok(false) => PhishingVerdict::NotPhishing,
            Err(e) => {
                error!(error = %e, "phishing detection failed");
                PhishingVerdict::Error
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
