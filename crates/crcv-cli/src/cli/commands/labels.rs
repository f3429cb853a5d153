//! `crcv labels` – list reference labels in registry order.

use anyhow::Result;
use crcv_core::config::CrcvConfig;

pub fn run_labels(cfg: &CrcvConfig) -> Result<()> {
    let registry = cfg.registry()?;
    if registry.is_empty() {
        println!("No references configured.");
        return Ok(());
    }
    println!("{:<24} CRC32", "LABEL");
    for r in registry.iter() {
        let marker = if cfg.default_label.as_deref() == Some(r.label.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!("{:<24} {}{}", r.label, r.checksum, marker);
    }
    Ok(())
}
