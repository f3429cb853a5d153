//! Verify a file's CRC32 against a labeled reference.

mod result;

pub use result::{Outcome, VerificationRequest, VerificationResult};

use crate::checksum;
use crate::error::VerifyError;
use crate::registry::ReferenceRegistry;
use std::path::Path;

/// Stateless verifier over an owned, immutable reference registry.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    registry: ReferenceRegistry,
}

impl Verifier {
    pub fn new(registry: ReferenceRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    /// Check `path` against the reference stored under `label`.
    ///
    /// An unknown label is a caller error. Unreadable files are reported as
    /// [`VerificationResult::Failed`], never retried.
    pub fn verify(&self, path: &Path, label: &str) -> Result<VerificationResult, VerifyError> {
        let expected = self
            .registry
            .get(label)
            .ok_or_else(|| VerifyError::InvalidLabel {
                label: label.to_string(),
                known: self.registry.labels().map(str::to_string).collect(),
            })?;

        tracing::debug!(path = %path.display(), label, %expected, "verifying");

        let result = match checksum::crc32_path(path) {
            Ok(computed) => {
                let outcome = if computed == expected {
                    Outcome::Match
                } else {
                    Outcome::Mismatch
                };
                tracing::info!(
                    path = %path.display(),
                    label,
                    %computed,
                    %expected,
                    outcome = outcome.as_str(),
                    "verification finished"
                );
                VerificationResult::Checked {
                    file_path: path.to_path_buf(),
                    label: label.to_string(),
                    computed,
                    expected,
                    outcome,
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), label, "verification failed: {}", e);
                VerificationResult::Failed {
                    file_path: path.to_path_buf(),
                    label: label.to_string(),
                    expected,
                    error: e.to_string(),
                }
            }
        };
        Ok(result)
    }

    pub fn verify_request(
        &self,
        req: &VerificationRequest,
    ) -> Result<VerificationResult, VerifyError> {
        self.verify(&req.file_path, &req.label)
    }
}
