use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Minimal typed view of a rewritten manifest, just deep enough to prove
/// the member list survived the rewrite.
#[derive(Debug, Deserialize)]
struct ManifestView {
    /// `[workspace]` table, when the member list lives under it.
    workspace: Option<MembersTable>,
    /// Top-level member list, for manifests without a workspace table.
    members: Option<Vec<String>>,
}

/// A table carrying a `members` array.
#[derive(Debug, Deserialize)]
struct MembersTable {
    /// The member list itself.
    members: Option<Vec<String>>,
}

/// Check that `content` parses as TOML and still carries a member array.
///
/// Runs on the assembled content before anything is written, so a rewrite
/// that would corrupt the manifest fails loudly and leaves the file alone.
///
/// # Errors
///
/// Returns an error if the content is not valid TOML (including duplicate
/// keys, e.g. a doubled pin line) or if no `members` array is present.
pub fn check_members_manifest(content: &str) -> Result<()> {
    let view: ManifestView =
        toml::from_str(content).context("Rewritten content is not valid TOML")?;
    let has_members =
        view.members.is_some() || view.workspace.is_some_and(|table| table.members.is_some());
    if !has_members {
        bail!("Rewritten content has no `members` array");
    }
    Ok(())
}
