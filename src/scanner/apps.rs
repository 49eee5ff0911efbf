use crate::{DEFAULT_IGNORE_DIRS, LEAF_MANIFEST, LEAF_SRC_DIR};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// How a directory under the scan root participates in the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLayout {
    /// Directly contains a manifest and a source directory; listed as a
    /// single member.
    Leaf,
    /// Its immediate children are each listed as separate members.
    Group,
}

/// Classify a directory from its immediate child names.
///
/// A leaf application directly contains both `Cargo.toml` and `src`;
/// anything else is treated as a grouping directory. Children of a grouping
/// directory are not validated further.
#[must_use]
pub fn classify(children: &[String]) -> AppLayout {
    let has_manifest = children.iter().any(|name| name == LEAF_MANIFEST);
    let has_src = children.iter().any(|name| name == LEAF_SRC_DIR);
    if has_manifest && has_src {
        AppLayout::Leaf
    } else {
        AppLayout::Group
    }
}

/// Scan `root` one level deep and produce the member paths it implies.
///
/// Every returned path is `<prefix>/<app>` for a leaf application or
/// `<prefix>/<app>/<child>` for each child of a grouping directory, with
/// `/` separators on every platform. Ordering follows the underlying
/// directory listing and is not canonical.
///
/// # Errors
///
/// Returns an error if `root` or one of its subdirectories cannot be read.
pub fn scan_apps(root: &Path, prefix: &str, extra_ignore: &[String]) -> Result<Vec<String>> {
    let span = span!(Level::DEBUG, "scan_apps", root = %root.display(), prefix);
    let _guard = span.enter();

    let mut members = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry
            .with_context(|| format!("Failed to scan application root: {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&name, extra_ignore) {
            debug!(app = %name, "Skipping ignored directory");
            continue;
        }

        let children = child_names(entry.path())?;
        match classify(&children) {
            AppLayout::Leaf => {
                debug!(app = %name, "Leaf application");
                members.push(format!("{prefix}/{name}"));
            }
            AppLayout::Group => {
                debug!(app = %name, children = children.len(), "Grouping directory");
                for child in children {
                    members.push(format!("{prefix}/{name}/{child}"));
                }
            }
        }
    }

    debug!(count = members.len(), "Scan complete");
    Ok(members)
}

/// List the immediate child names of a directory, in listing order.
fn child_names(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Whether a directory name is excluded from scanning.
fn is_ignored(name: &str, extra_ignore: &[String]) -> bool {
    DEFAULT_IGNORE_DIRS.iter().any(|ignored| *ignored == name)
        || extra_ignore.iter().any(|ignored| ignored == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn make_leaf(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::write(dir.join("Cargo.toml"), "[package]\n").unwrap();
    }

    #[rstest]
    #[case(&["Cargo.toml", "src"], AppLayout::Leaf)]
    #[case(&["Cargo.toml", "src", "README.md"], AppLayout::Leaf)]
    #[case(&["Cargo.toml"], AppLayout::Group)]
    #[case(&["src"], AppLayout::Group)]
    #[case(&[], AppLayout::Group)]
    fn classify_cases(#[case] children: &[&str], #[case] expected: AppLayout) {
        let children: Vec<String> = children.iter().map(ToString::to_string).collect();
        assert_eq!(classify(&children), expected);
    }

    #[test]
    fn test_leaf_and_grouping_scan() {
        let temp = TempDir::new().unwrap();
        make_leaf(temp.path(), "foo");
        let group = temp.path().join("bar");
        fs::create_dir_all(group.join("x")).unwrap();
        fs::create_dir_all(group.join("y")).unwrap();

        let members = scan_apps(temp.path(), "apps/std", &[]).unwrap();
        let members: HashSet<_> = members.into_iter().collect();
        let expected: HashSet<_> = ["apps/std/foo", "apps/std/bar/x", "apps/std/bar/y"]
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_grouping_children_not_validated() {
        // Shallow-scan policy: plain files inside a grouping directory are
        // still emitted as members.
        let temp = TempDir::new().unwrap();
        let group = temp.path().join("misc");
        fs::create_dir_all(&group).unwrap();
        fs::create_dir_all(group.join("real")).unwrap();
        fs::write(group.join("stray.txt"), "not an app").unwrap();

        let members = scan_apps(temp.path(), "apps/std", &[]).unwrap();
        let members: HashSet<_> = members.into_iter().collect();
        assert!(members.contains("apps/std/misc/real"));
        assert!(members.contains("apps/std/misc/stray.txt"));
    }

    #[test]
    fn test_ignores_vcs_and_plain_files() {
        let temp = TempDir::new().unwrap();
        make_leaf(temp.path(), "app");
        fs::create_dir_all(temp.path().join(".git").join("objects")).unwrap();
        fs::write(temp.path().join("README.md"), "# apps").unwrap();

        let members = scan_apps(temp.path(), "apps/std", &[]).unwrap();
        assert_eq!(members, vec!["apps/std/app".to_string()]);
    }

    #[test]
    fn test_extra_ignore() {
        let temp = TempDir::new().unwrap();
        make_leaf(temp.path(), "app");
        make_leaf(temp.path(), "vendor");

        let members = scan_apps(temp.path(), "apps/std", &["vendor".to_string()]).unwrap();
        assert_eq!(members, vec!["apps/std/app".to_string()]);
    }

    #[test]
    fn test_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(scan_apps(&missing, "apps/std", &[]).is_err());
    }
}
