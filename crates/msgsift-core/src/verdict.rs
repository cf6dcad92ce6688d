//! Detection domains and their closed verdict label sets
//!
//! Each detection domain has its own closed set of outcome labels. A verdict
//! is a pure function of the message content and the model state at call
//! time; no variant carries hidden state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detection domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Spam,
    Phishing,
}

impl Domain {
    /// Short name used in log fields and artifact file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Phishing => "phishing",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a spam detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpamVerdict {
    /// Input failed the minimum-length gate; nothing was scored
    InsufficientText,
    /// Keyword heuristic or model flagged the message
    Spam,
    NotSpam,
}

impl fmt::Display for SpamVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InsufficientText => "Insufficient Text",
            Self::Spam => "Spam",
            Self::NotSpam => "Not Spam",
        };
        f.write_str(label)
    }
}

/// Outcome of a phishing detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhishingVerdict {
    /// Input failed the minimum-length gate; nothing was scored
    InsufficientText,
    /// Embedded link or model flagged the message
    Phishing,
    NotPhishing,
    /// The model was unusable and no cheaper signal fired; there is no
    /// heuristic fallback in this domain
    Error,
}

impl fmt::Display for PhishingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InsufficientText => "Insufficient Text",
            Self::Phishing => "Phishing",
            Self::NotPhishing => "Not Phishing",
            Self::Error => "Error",
        };
        f.write_str(label)
    }
}
