//! Error types for checksum computation, reference registries and verification.

use std::io;
use std::path::PathBuf;

/// Failure while computing or parsing a CRC32 checksum.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// Path is missing, not a regular file, or could not be opened/read.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Text was not exactly 8 hexadecimal digits.
    #[error("invalid CRC32 value {0:?}: expected 8 hex digits")]
    InvalidHex(String),
}

impl ChecksumError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChecksumError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Invalid entry while building a [`ReferenceRegistry`](crate::registry::ReferenceRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("reference label must not be empty")]
    EmptyLabel,
    #[error("reference {label:?} has invalid checksum {value:?}")]
    InvalidChecksum { label: String, value: String },
    #[error("duplicate reference label {0:?}")]
    DuplicateLabel(String),
}

/// Caller-side contract violation during verification.
///
/// File access problems are not errors here: they come back as a
/// [`VerificationResult::Failed`](crate::verify::VerificationResult::Failed).
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("unknown reference label {label:?} (known: {})", .known.join(", "))]
    InvalidLabel { label: String, known: Vec<String> },
}
