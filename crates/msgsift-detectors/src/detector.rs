//! Detector trait

use async_trait::async_trait;

/// Trait for all detectors
///
/// A detection call always returns a label from the domain's closed verdict
/// set; validation and model failures are folded into labels rather than
/// surfaced as errors. Detectors are immutable after construction, so a
/// host runtime may drive independent calls concurrently.
#[async_trait]
pub trait Detector: Send + Sync {
    /// The closed verdict set for this detector's domain
    type Verdict;

    /// Classify the given message text
    async fn detect(&self, text: &str) -> Self::Verdict;

    /// Get the detector name
    fn name(&self) -> &str;
}
