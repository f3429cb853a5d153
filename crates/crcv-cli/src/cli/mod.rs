//! CLI for CRCV.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use crcv_core::config::{self, CrcvConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use commands::{run_checksum, run_completions, run_labels, run_verify};

/// Top-level CLI for the CRC32 reference verifier.
#[derive(Debug, Parser)]
#[command(name = "crcv")]
#[command(about = "CRCV: check a file's CRC32 against known reference values", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/crcv/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a file's CRC32 against a labeled reference (exit 1 on mismatch).
    Verify {
        /// Path to the file. Drag-and-drop wrappers like `{...}` or quotes are stripped.
        path: String,
        /// Reference label (see `crcv labels`). Defaults to `default_label` from config.
        #[arg(long, short)]
        label: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute and print the CRC32 of a file.
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// List the configured reference labels and checksums.
    Labels,

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<CrcvConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Verify { path, label, json } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_verify(&cfg, &path, label.as_deref(), json).await
            }
            CliCommand::Checksum { path } => {
                run_checksum(Path::new(&path)).await?;
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Labels => {
                let cfg = load_config(cli.config.as_deref())?;
                run_labels(&cfg)?;
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
