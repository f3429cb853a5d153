//! CRC32 computation (ISO 3309 / zlib polynomial) for files and byte slices.
//!
//! Files are streamed in fixed-size chunks; the digest is identical to hashing
//! the whole content at once.

use crate::error::ChecksumError;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

const BUF_SIZE: usize = 64 * 1024;

/// A CRC32 value. Displays as 8 upper-case, zero-padded hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Checksum(u32);

impl Checksum {
    pub const fn new(value: u32) -> Self {
        Checksum(value)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl FromStr for Checksum {
    type Err = ChecksumError;

    /// Accepts exactly 8 hex digits in either case, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() != 8 || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChecksumError::InvalidHex(s.to_string()));
        }
        u32::from_str_radix(t, 16)
            .map(Checksum)
            .map_err(|_| ChecksumError::InvalidHex(s.to_string()))
    }
}

impl TryFrom<String> for Checksum {
    type Error = ChecksumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Checksum> for String {
    fn from(c: Checksum) -> Self {
        c.to_string()
    }
}

/// CRC32 of an in-memory byte slice.
pub fn crc32_bytes(data: &[u8]) -> Checksum {
    Checksum(crc32fast::hash(data))
}

/// Compute the CRC32 of a regular file.
///
/// Missing paths, directories and other non-regular files fail with
/// [`ChecksumError::FileAccess`] before anything is opened.
pub fn crc32_path(path: &Path) -> Result<Checksum, ChecksumError> {
    let meta = fs::metadata(path).map_err(|e| ChecksumError::file_access(path, e))?;
    if !meta.is_file() {
        let kind = if meta.is_dir() { "is a directory" } else { "not a regular file" };
        return Err(ChecksumError::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, kind),
        ));
    }

    let mut f = File::open(path).map_err(|e| ChecksumError::file_access(path, e))?;
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match f.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChecksumError::file_access(path, e)),
        };
        hasher.update(&buf[..n]);
    }
    let crc = Checksum(hasher.finalize());
    tracing::trace!(path = %path.display(), %crc, "computed crc32");
    Ok(crc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn crc32_path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let crc = crc32_path(f.path()).unwrap();
        assert_eq!(crc.to_string(), "00000000");
    }

    #[test]
    fn crc32_path_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        assert_eq!(crc32_path(f.path()).unwrap().to_string(), "363A3020");
    }

    #[test]
    fn crc32_check_value() {
        assert_eq!(crc32_bytes(b"123456789"), Checksum::new(0xCBF4_3926));
        assert_eq!(
            crc32_bytes(b"The quick brown fox jumps over the lazy dog").to_string(),
            "414FA339"
        );
    }

    #[test]
    fn crc32_path_streams_across_chunks() {
        let data: Vec<u8> = (0u8..=250).cycle().take(BUF_SIZE * 3 + 17).collect();
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&data).unwrap();
        f.flush().unwrap();
        let from_file = crc32_path(f.path()).unwrap();
        assert_eq!(from_file, crc32_bytes(&data));
        assert_eq!(crc32_path(f.path()).unwrap(), from_file);
    }

    #[test]
    fn single_byte_change_changes_crc() {
        let mut data = b"BASIC/LV image\n".to_vec();
        let before = crc32_bytes(&data);
        data[3] ^= 0x01;
        assert_ne!(crc32_bytes(&data), before);
    }

    #[test]
    fn display_is_zero_padded_upper_hex() {
        assert_eq!(Checksum::new(0xab).to_string(), "000000AB");
        assert_eq!(Checksum::new(0x932e_a465).to_string(), "932EA465");
    }

    #[test]
    fn parse_accepts_either_case() {
        let upper: Checksum = "932EA465".parse().unwrap();
        let lower: Checksum = " 932ea465 ".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower, Checksum::new(0x932E_A465));
    }

    #[test]
    fn parse_rejects_wrong_length_and_non_hex() {
        for bad in ["", "932EA46", "932EA4650", "0x932EA4", "932EA46G", "+32EA465"] {
            assert!(
                matches!(bad.parse::<Checksum>(), Err(ChecksumError::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_path_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        match crc32_path(&missing) {
            Err(ChecksumError::FileAccess { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = crc32_path(dir.path()).unwrap_err();
        assert!(matches!(err, ChecksumError::FileAccess { .. }));
        assert!(err.to_string().contains("is a directory"), "{err}");
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Checksum::new(0x6477_bba7)).unwrap();
        assert_eq!(json, "\"6477BBA7\"");
        let back: Checksum = serde_json::from_str("\"6477bba7\"").unwrap();
        assert_eq!(back, Checksum::new(0x6477_bba7));
        assert!(serde_json::from_str::<Checksum>("\"xyz\"").is_err());
    }
}
