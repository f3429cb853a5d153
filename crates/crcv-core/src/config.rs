use crate::registry::{ReferenceRegistry, BUILTIN_REFERENCES};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI decorates verification output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Icon markers in front of each line (the desktop tool's look).
    #[default]
    Emoji,
    /// Plain ASCII, for logs and terminals without emoji fonts.
    Plain,
}

/// One `[[references]]` table in config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub label: String,
    /// 8 hex digits, either case.
    pub checksum: String,
}

/// Global configuration loaded from `~/.config/crcv/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrcvConfig {
    #[serde(default)]
    pub output_style: OutputStyle,
    /// Label used when the caller doesn't pick one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_label: Option<String>,
    /// Reference checksums in display order. Empty means the built-in presets.
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

impl Default for CrcvConfig {
    fn default() -> Self {
        Self {
            output_style: OutputStyle::default(),
            default_label: None,
            references: BUILTIN_REFERENCES
                .iter()
                .map(|(label, checksum)| ReferenceEntry {
                    label: label.to_string(),
                    checksum: checksum.to_string(),
                })
                .collect(),
        }
    }
}

impl CrcvConfig {
    /// Build the validated registry handed to the verifier.
    pub fn registry(&self) -> Result<ReferenceRegistry> {
        let reg = if self.references.is_empty() {
            ReferenceRegistry::builtin()
        } else {
            ReferenceRegistry::from_entries(
                self.references
                    .iter()
                    .map(|r| (r.label.as_str(), r.checksum.as_str())),
            )
            .context("invalid [[references]] in config")?
        };
        if let Some(label) = &self.default_label {
            if !reg.contains(label) {
                anyhow::bail!("default_label {:?} is not a configured reference", label);
            }
        }
        Ok(reg)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("crcv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CrcvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CrcvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file (no defaults written).
pub fn load_from(path: &Path) -> Result<CrcvConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CrcvConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
