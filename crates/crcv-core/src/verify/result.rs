//! Verification request/result types handed across the shell boundary.

use crate::checksum::Checksum;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file to check and the reference label to check it against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub file_path: PathBuf,
    pub label: String,
}

impl VerificationRequest {
    pub fn new(file_path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Match,
    Mismatch,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Match => "MATCH",
            Outcome::Mismatch => "MISMATCH",
        }
    }
}

/// Result of one verification. A fresh value per call, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VerificationResult {
    /// The file was read and its CRC32 compared.
    Checked {
        file_path: PathBuf,
        label: String,
        computed: Checksum,
        expected: Checksum,
        outcome: Outcome,
    },
    /// The file could not be read; `error` holds the cause chain for display.
    Failed {
        file_path: PathBuf,
        label: String,
        expected: Checksum,
        error: String,
    },
}

impl VerificationResult {
    pub fn file_path(&self) -> &Path {
        match self {
            VerificationResult::Checked { file_path, .. }
            | VerificationResult::Failed { file_path, .. } => file_path,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            VerificationResult::Checked { label, .. }
            | VerificationResult::Failed { label, .. } => label,
        }
    }

    pub fn expected(&self) -> Checksum {
        match self {
            VerificationResult::Checked { expected, .. }
            | VerificationResult::Failed { expected, .. } => *expected,
        }
    }

    pub fn computed(&self) -> Option<Checksum> {
        match self {
            VerificationResult::Checked { computed, .. } => Some(*computed),
            VerificationResult::Failed { .. } => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            VerificationResult::Checked { outcome, .. } => Some(*outcome),
            VerificationResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            VerificationResult::Failed { error, .. } => Some(error),
            VerificationResult::Checked { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.outcome() == Some(Outcome::Match)
    }
}
