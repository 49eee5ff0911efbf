use crate::SyncContext;
use crate::manifest::{self, SyncMode};
use crate::scanner;
use anyhow::{Context, Result};

/// Rescan the application tree and rewrite the manifest's member list.
///
/// Owned entries are replaced by freshly scanned ones; foreign entries and
/// all other content pass through unchanged. The dependency pin line is
/// rewritten unless the context disables it.
///
/// # Errors
///
/// Returns an error if:
/// - The application root cannot be scanned
/// - The manifest cannot be read or written
/// - The manifest has no member block, or the rewrite would corrupt it
pub fn execute(ctx: &SyncContext) -> Result<()> {
    let apps_root = ctx
        .apps_root
        .as_ref()
        .context("No application root configured for update")?;

    let members = scanner::scan_apps(apps_root, &ctx.prefix, &ctx.ignore)?;
    if members.is_empty() {
        super::print_warning(&format!(
            "No applications found under {}",
            apps_root.display()
        ));
    }

    manifest::rewrite(
        &ctx.manifest_path,
        &members,
        SyncMode::Update,
        &ctx.prefix,
        ctx.write_pin,
    )?;

    super::print_success(&format!(
        "Updated {} with {} member(s) under {}",
        ctx.manifest_path.display(),
        members.len(),
        ctx.prefix
    ));
    Ok(())
}
