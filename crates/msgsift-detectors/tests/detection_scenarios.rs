//! End-to-end detection scenarios over artifacts loaded from disk
//!
//! Exercises the full pipeline: registry load from a models directory,
//! detector construction, and the fused verdicts for both domains.

use msgsift_core::{Domain, PhishingVerdict, SpamVerdict};
use msgsift_detectors::prelude::*;
use msgsift_detectors::{PHISHING_MODEL_FILE, SPAM_MODEL_FILE};
use std::path::Path;

/// Write both domain artifacts into `dir` and load a registry from it
fn registry_with_models(dir: &Path) -> ModelRegistry {
    let spam = serde_json::json!({
        "schema_version": 1,
        "positive_label": "spam",
        "vocabulary": ["congratulations", "claim", "reward", "selected", "meeting", "agenda"],
        "idf": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "weights": [1.3, 1.1, 1.2, 0.9, -0.8, -0.7],
        "intercept": -0.2
    });
    let phishing = serde_json::json!({
        "schema_version": 1,
        "positive_label": "phishing",
        "vocabulary": ["password", "verify", "account", "bank", "security", "meeting", "newsletter"],
        "idf": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "weights": [1.1, 1.0, 0.9, 1.2, 0.8, -0.7, -0.9],
        "intercept": -0.25
    });

    std::fs::write(dir.join(SPAM_MODEL_FILE), spam.to_string()).unwrap();
    std::fs::write(dir.join(PHISHING_MODEL_FILE), phishing.to_string()).unwrap();

    let registry = ModelRegistry::load(dir);
    assert!(registry.is_loaded(Domain::Spam));
    assert!(registry.is_loaded(Domain::Phishing));
    registry
}

#[tokio::test]
async fn scenario_short_text_is_insufficient_for_both_domains() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());

    let text = "a".repeat(59);

    let spam = SpamDetector::new(&registry).unwrap();
    assert_eq!(spam.detect(&text).await, SpamVerdict::InsufficientText);

    let phishing = PhishingDetector::new(&registry).unwrap();
    assert_eq!(phishing.detect(&text).await, PhishingVerdict::InsufficientText);
}

#[tokio::test]
async fn scenario_keyword_hits_alone_classify_as_spam() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());
    let spam = SpamDetector::new(&registry).unwrap();

    // Three distinct trigger phrases; the model's opinion is irrelevant
    let text = "urgent: please verify now and click here to keep your mailbox active this week.";
    assert_eq!(spam.detect(text).await, SpamVerdict::Spam);
}

#[tokio::test]
async fn scenario_keyword_hits_classify_as_spam_without_any_model() {
    let spam = SpamDetector::new(&ModelRegistry::unloaded()).unwrap();

    let text = "urgent: please verify now and click here to keep your mailbox active this week.";
    assert_eq!(spam.detect(text).await, SpamVerdict::Spam);
}

#[tokio::test]
async fn scenario_link_classifies_as_phishing_and_spam_follows_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());

    let text =
        "Your password reset is available at http://example.com/reset whenever you are ready.";

    // URL short-circuits the phishing model
    let phishing = PhishingDetector::new(&registry).unwrap();
    assert_eq!(phishing.detect(text).await, PhishingVerdict::Phishing);

    // No spam keywords: the spam verdict is the model's alone, and this
    // text scores negative
    let spam = SpamDetector::new(&registry).unwrap();
    assert_eq!(spam.detect(text).await, SpamVerdict::NotSpam);
}

#[tokio::test]
async fn scenario_clean_text_with_unavailable_spam_model_is_not_spam() {
    let spam = SpamDetector::new(&ModelRegistry::unloaded()).unwrap();

    let text = "The quarterly planning document is ready for review tomorrow morning.";
    assert_eq!(spam.detect(text).await, SpamVerdict::NotSpam);
}

#[tokio::test]
async fn scenario_unavailable_phishing_model_without_link_is_error() {
    let phishing = PhishingDetector::new(&ModelRegistry::unloaded()).unwrap();

    let text = "A long enough message without any embedded links in it at all.";
    assert_eq!(phishing.detect(text).await, PhishingVerdict::Error);
}

#[tokio::test]
async fn model_verdict_alone_classifies_as_spam() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());
    let spam = SpamDetector::new(&registry).unwrap();

    // Zero trigger phrases, but the model scores this positive
    let text =
        "congratulations, you can claim a reward immediately after registration online today.";
    assert_eq!(spam.detect(text).await, SpamVerdict::Spam);
}

#[tokio::test]
async fn phishing_model_decides_when_no_link_is_present() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());
    let phishing = PhishingDetector::new(&registry).unwrap();

    let positive =
        "Dear customer, your bank account security needs attention, confirm your password immediately.";
    assert_eq!(phishing.detect(positive).await, PhishingVerdict::Phishing);

    let negative =
        "Our weekly newsletter covers the quarterly meeting schedule and campus updates for everyone.";
    assert_eq!(phishing.detect(negative).await, PhishingVerdict::NotPhishing);
}

#[tokio::test]
async fn detection_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_with_models(dir.path());
    let spam = SpamDetector::new(&registry).unwrap();
    let phishing = PhishingDetector::new(&registry).unwrap();

    let texts = [
        "urgent: please verify now and click here to keep your mailbox active this week.",
        "Your password reset is available at http://example.com/reset whenever you are ready.",
        "The quarterly planning document is ready for review tomorrow morning.",
    ];

    for text in texts {
        assert_eq!(spam.detect(text).await, spam.detect(text).await);
        assert_eq!(phishing.detect(text).await, phishing.detect(text).await);
    }
}
