//! Embedded-link detector
//!
//! Fast deterministic check for an http/https URL in the message. In the
//! phishing domain a hit is sufficient on its own and short-circuits before
//! the model is ever invoked.

use msgsift_core::{Error, Result};
use regex::Regex;

/// Matches `http://` or `https://` followed by a run of non-whitespace
const LINK_PATTERN: &str = r"https?://\S+";

/// Detects the presence of an embedded URL
pub struct LinkDetector {
    pattern: Regex,
}

impl LinkDetector {
    /// Compile the link pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(LINK_PATTERN)
            .map_err(|e| Error::detector(format!("failed to compile link pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// True if the text contains at least one embedded URL
    pub fn contains_link(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
