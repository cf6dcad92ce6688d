//! Minimum-length validation gate
//!
//! Runs before any heuristic or model invocation; a message that fails the
//! gate is never scored, so a wasted model call cannot happen downstream.

/// Minimum trimmed length, in characters, for a message to be scored
pub const MIN_MESSAGE_CHARS: usize = 60;

/// Result of the validation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    /// Message passed the gate; holds the trimmed view used for scoring
    Valid(&'a str),
    /// Trimmed message is shorter than [`MIN_MESSAGE_CHARS`]
    Insufficient,
}

/// Check a message against the minimum-length precondition.
///
/// Length is measured in characters of the whitespace-trimmed text, not
/// bytes. Pure; no side effects.
pub fn check(text: &str) -> Gate<'_> {
    let trimmed = text.trim();
    if trimmed.chars().count() >= MIN_MESSAGE_CHARS {
        Gate::Valid(trimmed)
    } else {
        Gate::Insufficient
    }
}
