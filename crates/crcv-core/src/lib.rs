//! CRCV core: CRC32 verification of files against labeled reference checksums.

pub mod checksum;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod verify;

pub use checksum::{crc32_bytes, crc32_path, Checksum};
pub use error::{ChecksumError, RegistryError, VerifyError};
pub use registry::{Reference, ReferenceRegistry};
pub use verify::{Outcome, VerificationRequest, VerificationResult, Verifier};
