//! msgsift Core
//!
//! Shared types for the msgsift message classification workspace.
//!
//! This crate provides:
//! - The workspace error type and result alias
//! - The detection domain and per-domain verdict vocabulary

pub mod error;
pub mod verdict;

pub use error::{Error, Result};
pub use verdict::{Domain, PhishingVerdict, SpamVerdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::verdict::{Domain, PhishingVerdict, SpamVerdict};
}
