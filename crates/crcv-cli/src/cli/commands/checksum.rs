//! Checksum command: compute CRC32 of a file.

use anyhow::Result;
use crcv_core::checksum;
use std::path::Path;

/// Compute and print CRC32 of the given file.
pub async fn run_checksum(path: &Path) -> Result<()> {
    let owned = path.to_path_buf();
    let crc = tokio::task::spawn_blocking(move || checksum::crc32_path(&owned)).await??;
    println!("{}  {}", crc, path.display());
    Ok(())
}
