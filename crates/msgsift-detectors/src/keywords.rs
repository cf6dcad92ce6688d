//! Keyword membership scorer
//!
//! Counts how many trigger phrases from a fixed set occur in the message,
//! case-insensitively, anywhere in the text. Membership test, not an
//! occurrence count: a phrase contributes at most 1 no matter how often it
//! repeats. Mid-token hits ("urgent" inside "urgently") are intentional.

use aho_corasick::AhoCorasick;
use msgsift_core::{Error, Result};

/// Spam trigger phrases, matched case-insensitively.
///
/// Process-wide constant; built into a matcher once per detector
/// construction. The list must be free of case-insensitive duplicates so a
/// single phrase can never contribute twice to the score.
pub const SPAM_KEYWORDS: &[&str] = &[
    // Carrier shortcodes and urgency phrasing
    "sms",
    "reply",
    "end",
    "sptv",
    "txt",
    "stop",
    "cancel",
    "unsubscribe",
    "limited time",
    "offer",
    "urgent",
    "immediate action required",
    "act now",
    "failure to act",
    "limited-time offer",
    "hurry",
    "expiring soon",
    "urgent alert",
    "risk-free",
    "immediate refund",
    "unclaimed funds",
    "last chance",
    "final notice",
    "your account is locked",
    "verify now",
    "prevent suspension",
    "unauthorized activity",
    // Money and financial scams
    "winner",
    "you have won",
    "cash prize",
    "lottery",
    "$1000",
    "free money",
    "get rich quick",
    "double your money",
    "investment opportunity",
    "cryptocurrency",
    "high returns",
    "no credit check",
    "tax refund",
    "pre-approved loan",
    "make money fast",
    // Fake tech and security alerts
    "your account has been compromised",
    "unusual login attempt",
    "security warning",
    "virus detected",
    "your computer is infected",
    "contact support immediately",
    "call now",
    "microsoft security team",
    "paypal alert",
    "banking issue",
    "suspicious",
    "suspicious activity",
    "payment failure",
    // Job and work-from-home scams
    "work from home",
    "earn $5000 per month",
    "no experience needed",
    "guaranteed income",
    "flexible working hours",
    "remote job",
    "passive income",
    "exclusive job offer",
    "data entry job",
    "recruitment team",
    // Fake promotions and giveaways
    "free gift",
    "claim your prize",
    "special offer",
    "you have been selected",
    "buy one get one free",
    "free trial",
    "complimentary",
    "no hidden fees",
    "exclusive deal",
    "vip access",
    // Subscription and payment scams
    "your subscription is expiring",
    "update your payment details",
    "your service has been suspended",
    "renew now",
    "credit card required",
    "billing issue",
    // Loan and financial-assistance scams
    "no collateral required",
    "0% interest",
    "personal loan offer",
    "instant approval",
    "government grant",
    // Credential phishing phrasing
    "click here",
    "verify your identity",
    "login required",
    "confirm your account",
    "secure your information",
    "your account will be locked",
    "reset your password",
];

/// Counts distinct trigger-phrase hits using an Aho-Corasick automaton
pub struct KeywordScorer {
    matcher: AhoCorasick,
    keyword_count: usize,
}

impl KeywordScorer {
    /// Build a scorer over the given phrase set
    pub fn new(keywords: &[&str]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| Error::detector(format!("failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            matcher,
            keyword_count: keywords.len(),
        })
    }

    /// Build the spam scorer over [`SPAM_KEYWORDS`]
    pub fn spam() -> Result<Self> {
        Self::new(SPAM_KEYWORDS)
    }

    /// Count the distinct keywords occurring anywhere in `text`.
    ///
    /// Overlapping matches are scanned so that phrases nested inside longer
    /// phrases ("offer" inside "special offer") each register. Pure and
    /// deterministic.
    pub fn score(&self, text: &str) -> usize {
        let mut seen = vec![false; self.keyword_count];
        for m in self.matcher.find_overlapping_iter(text) {
            seen[m.pattern().as_usize()] = true;
        }
        seen.iter().filter(|hit| **hit).count()
    }
}
