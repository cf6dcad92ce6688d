//! msgsift Detectors
//!
//! Spam and phishing detection over a block of message text, fusing a fixed
//! keyword heuristic with the verdict of an externally trained linear
//! classifier.
//!
//! The pipeline per call is: length gate first (short-circuits with
//! `Insufficient Text`), then the cheap deterministic signals (keyword
//! membership for spam, embedded-link check for phishing), then the model.
//! Model artifacts are loaded once at startup into a [`ModelRegistry`];
//! a missing or corrupt artifact degrades that domain but never crashes
//! the process.

pub mod artifact;
pub mod detector;
pub mod gate;
pub mod keywords;
pub mod links;
pub mod model;
pub mod phishing;
pub mod registry;
pub mod spam;

pub use artifact::{ModelArtifact, SCHEMA_VERSION};
pub use detector::Detector;
pub use gate::{Gate, MIN_MESSAGE_CHARS};
pub use keywords::{KeywordScorer, SPAM_KEYWORDS};
pub use links::LinkDetector;
pub use model::{LinearModel, ModelScorer};
pub use phishing::PhishingDetector;
pub use registry::{ModelRegistry, PHISHING_MODEL_FILE, SPAM_MODEL_FILE};
pub use spam::{SpamDetector, SPAM_KEYWORD_THRESHOLD};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::detector::Detector;
    pub use crate::phishing::PhishingDetector;
    pub use crate::registry::ModelRegistry;
    pub use crate::spam::SpamDetector;
    pub use msgsift_core::{Domain, PhishingVerdict, SpamVerdict};
}
