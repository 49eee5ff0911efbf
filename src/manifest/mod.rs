/// Three-state line partitioner for the member block.
pub mod parser;

/// Pre-write TOML well-formedness checks.
pub mod validator;

pub use parser::{LinePartition, partition_lines};

use crate::{PIN_DEP_TOKEN, PIN_LINE};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{Level, debug, span};

/// Whether a run refreshes the member list or clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Replace owned entries with freshly scanned ones and rewrite the pin.
    Update,
    /// Drop owned entries and the pin, adding nothing.
    Delete,
}

/// Rewrite the manifest at `path` in place.
///
/// Reads the file, partitions its lines around the member block, injects
/// one entry per supplied member path, drops any existing pin line, and
/// appends a fresh pin in update mode (unless suppressed). The assembled
/// content is validated before the file is touched; the write itself is a
/// plain truncate-and-write with no temp-file discipline.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, if the member
/// block is missing or unterminated, or if the assembled content would not
/// be a valid manifest.
pub fn rewrite(
    path: &Path,
    members: &[String],
    mode: SyncMode,
    prefix: &str,
    write_pin: bool,
) -> Result<()> {
    let span = span!(Level::DEBUG, "rewrite_manifest", path = %path.display(), ?mode);
    let _guard = span.enter();

    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    let content = render(&original, members, mode, prefix, write_pin)?;

    validator::check_members_manifest(&content).with_context(|| {
        format!(
            "Refusing to rewrite {}: result would not be a valid manifest",
            path.display()
        )
    })?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    Ok(())
}

/// Assemble the rewritten manifest content without touching the filesystem.
///
/// Output order: all *before* lines, one quoted 4-space-indented entry per
/// member, the *after* lines minus any existing pin line, then the fresh
/// pin at end of file in update mode.
///
/// # Errors
///
/// Returns an error if the member block is missing or unterminated.
pub fn render(
    original: &str,
    members: &[String],
    mode: SyncMode,
    prefix: &str,
    write_pin: bool,
) -> Result<String> {
    let partition = parser::partition_lines(original, prefix)?;

    let mut out = String::with_capacity(original.len());
    for line in &partition.before {
        out.push_str(line);
    }
    for member in members {
        out.push_str(&format!("    \"{member}\",\n"));
    }

    let mut dropped_pins = 0_usize;
    for line in &partition.after {
        if line.starts_with(PIN_DEP_TOKEN) {
            dropped_pins += 1;
            continue;
        }
        out.push_str(line);
    }

    if mode == SyncMode::Update && write_pin {
        // Keep the pin on its own line even when the passthrough content
        // lacks a final newline.
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(PIN_LINE);
        out.push('\n');
    }

    debug!(
        injected = members.len(),
        dropped_pins, "Manifest content assembled"
    );
    Ok(out)
}
