use crate::SyncContext;
use crate::manifest::{self, SyncMode};
use anyhow::Result;

/// Remove every owned member entry and the dependency pin line.
///
/// No scan is performed; the member block keeps only foreign entries and
/// nothing is added.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or written, or if it has
/// no member block.
pub fn execute(ctx: &SyncContext) -> Result<()> {
    manifest::rewrite(
        &ctx.manifest_path,
        &[],
        SyncMode::Delete,
        &ctx.prefix,
        false,
    )?;

    super::print_success(&format!(
        "Removed {} members from {}",
        ctx.prefix,
        ctx.manifest_path.display()
    ));
    Ok(())
}
