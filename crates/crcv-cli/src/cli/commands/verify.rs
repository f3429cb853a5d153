//! `crcv verify <path> --label <LABEL>` – check a file against a reference.

use anyhow::{bail, Result};
use crcv_core::config::{CrcvConfig, OutputStyle};
use crcv_core::{Outcome, ReferenceRegistry, VerificationRequest, VerificationResult, Verifier};
use std::fmt::Write as _;
use std::process::ExitCode;

/// Strip the wrappers file managers add to dropped or pasted paths:
/// surrounding whitespace, one pair of `{}` and one pair of quotes.
pub(crate) fn clean_dropped_path(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(inner) = s.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        s = inner;
    }
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            s = &s[1..s.len() - 1];
            break;
        }
    }
    s
}

/// Pick the label from the command line, else `default_label`, else fail listing choices.
pub(crate) fn resolve_label(
    explicit: Option<&str>,
    default_label: Option<&str>,
    registry: &ReferenceRegistry,
) -> Result<String> {
    match explicit.or(default_label) {
        Some(label) => Ok(label.to_string()),
        None => {
            let known: Vec<&str> = registry.labels().collect();
            bail!(
                "no --label given and no default_label configured (known: {})",
                known.join(", ")
            )
        }
    }
}

/// Text rendering of a result, in the layout the desktop tool used.
pub(crate) fn render_result(result: &VerificationResult, style: OutputStyle) -> String {
    let (file, crc, expected, verdict) = match style {
        OutputStyle::Emoji => ("📁 File", "🔑 CRC32", "🎯 Expected", "📊 Result"),
        OutputStyle::Plain => ("File", "CRC32", "Expected", "Result"),
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", file, result.file_path().display());
    let _ = writeln!(out);
    match result.computed() {
        Some(c) => {
            let _ = writeln!(out, "{}: {}", crc, c);
        }
        None => {
            let _ = writeln!(out, "{}: Error: {}", crc, result.error().unwrap_or("unknown"));
        }
    }
    let _ = writeln!(out, "{}: {}  ({})", expected, result.expected(), result.label());
    let _ = writeln!(out);
    let status = match (result.outcome(), style) {
        (Some(Outcome::Match), OutputStyle::Emoji) => "✅ MATCH",
        (Some(Outcome::Mismatch), OutputStyle::Emoji) => "❌ MISMATCH",
        (None, OutputStyle::Emoji) => "⚠️ ERROR",
        (Some(o), OutputStyle::Plain) => o.as_str(),
        (None, OutputStyle::Plain) => "ERROR",
    };
    let _ = write!(out, "{}: {}", verdict, status);
    out
}

/// Output for one result: pretty JSON, or the text layout in the configured style.
pub(crate) fn format_output(
    result: &VerificationResult,
    style: OutputStyle,
    json: bool,
) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(render_result(result, style))
    }
}

/// Verify one file. Returns success only on a match.
pub async fn run_verify(
    cfg: &CrcvConfig,
    path: &str,
    label: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let verifier = Verifier::new(cfg.registry()?);
    let label = resolve_label(label, cfg.default_label.as_deref(), verifier.registry())?;
    let req = VerificationRequest::new(clean_dropped_path(path), label);

    let result = tokio::task::spawn_blocking(move || verifier.verify_request(&req)).await??;
    println!("{}", format_output(&result, cfg.output_style, json)?);

    Ok(if result.is_match() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
