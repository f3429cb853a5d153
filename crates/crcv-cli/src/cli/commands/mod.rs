//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod labels;
mod verify;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use labels::run_labels;
pub use verify::run_verify;

#[cfg(test)]
pub(crate) use verify::{clean_dropped_path, format_output, render_result, resolve_label};
