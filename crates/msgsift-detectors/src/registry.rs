//! Model registry
//!
//! One-shot startup load of the per-domain model artifacts. Each domain is
//! independently `Loaded` or `LoadFailed`; a failure is logged once and
//! leaves that domain degraded for the life of the process. There is no
//! reload or retry, and the registry is read-only after construction, so
//! detectors can share it without coordination.

use crate::artifact::ModelArtifact;
use crate::model::LinearModel;
use msgsift_core::Domain;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Artifact file name for the spam domain
pub const SPAM_MODEL_FILE: &str = "spam.model.json";

/// Artifact file name for the phishing domain
pub const PHISHING_MODEL_FILE: &str = "phishing.model.json";

/// Holds whichever per-domain models loaded at startup
pub struct ModelRegistry {
    spam: Option<Arc<LinearModel>>,
    phishing: Option<Arc<LinearModel>>,
}

impl ModelRegistry {
    /// Load both domain artifacts from the fixed file names under
    /// `base_dir`. Never fails: a missing or corrupt artifact degrades its
    /// domain and is reported at error level.
    pub fn load(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            spam: Self::load_domain(base_dir, Domain::Spam, SPAM_MODEL_FILE),
            phishing: Self::load_domain(base_dir, Domain::Phishing, PHISHING_MODEL_FILE),
        }
    }

    /// Registry with no models loaded; both domains run degraded
    pub fn unloaded() -> Self {
        Self {
            spam: None,
            phishing: None,
        }
    }

    fn load_domain(base_dir: &Path, domain: Domain, file_name: &str) -> Option<Arc<LinearModel>> {
        let path = base_dir.join(file_name);
        match ModelArtifact::from_file(&path).and_then(LinearModel::from_artifact) {
            Ok(model) => {
                info!(
                    domain = %domain,
                    path = %path.display(),
                    positive_label = model.positive_label(),
                    "model loaded"
                );
                Some(Arc::new(model))
            }
            Err(e) => {
                error!(
                    domain = %domain,
                    path = %path.display(),
                    error = %e,
                    "model load failed, domain degraded"
                );
                None
            }
        }
    }

    /// Get the loaded model for a domain, if any
    pub fn model(&self, domain: Domain) -> Option<Arc<LinearModel>> {
        match domain {
            Domain::Spam => self.spam.clone(),
            Domain::Phishing => self.phishing.clone(),
        }
    }

    /// Whether a domain's model loaded
    pub fn is_loaded(&self, domain: Domain) -> bool {
        self.model(domain).is_some()
    }
}
