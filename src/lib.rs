#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Memsync - Workspace Member Synchronizer
//!
//! Memsync keeps the `members` list of a workspace manifest in step with the
//! application directories that actually exist on disk. It scans an
//! application root one level deep, classifies each entry as a leaf
//! application or a grouping directory, and rewrites the manifest's member
//! block in place, replacing every entry under the owned path prefix while
//! leaving all other content byte-for-byte untouched. In update mode it also
//! refreshes a single dependency pin line.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line argument definitions (shared with xtask)
//! - [`commands`]: Command implementations (update, delete)
//! - [`scanner`]: Application directory discovery and classification
//! - [`manifest`]: Member-block partitioning, rewriting, and validation
//!
//! ## Example Usage
//!
//! ```no_run
//! use memsync::SyncContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = SyncContext::new(
//!     "Cargo.toml".into(),
//!     Some("apps".into()),
//!     memsync::DEFAULT_MEMBER_PREFIX.to_string(),
//!     Vec::new(),
//!     true,
//! )?;
//! memsync::commands::update::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing the CLI command implementations.
pub mod commands;

/// Manifest partitioning, rewriting, and pre-write validation.
pub mod manifest;

/// Application directory scanning and classification.
pub mod scanner;

use anyhow::Result;
use std::path::PathBuf;

/// Current version of the memsync binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Member path prefix owned by this tool; every entry under it is replaced
/// or removed on each run.
pub const DEFAULT_MEMBER_PREFIX: &str = "apps/std";

/// File that marks a directory as a leaf application (together with
/// [`LEAF_SRC_DIR`]).
pub const LEAF_MANIFEST: &str = "Cargo.toml";

/// Source directory that marks a directory as a leaf application (together
/// with [`LEAF_MANIFEST`]).
pub const LEAF_SRC_DIR: &str = "src";

/// Directory names that are never treated as applications.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".git"];

/// Declaration token identifying the owned dependency pin line.
pub const PIN_DEP_TOKEN: &str = "toml_edit = ";

/// The dependency pin line written after the member block in update mode.
pub const PIN_LINE: &str = r#"toml_edit = { path = "crates/toml/crates/toml_edit" }"#;

/// Settings for one synchronization run.
///
/// Holds the manifest to rewrite, the application root to scan (absent in
/// delete mode), and the knobs that default to the standard-application
/// layout. Built once per invocation and passed to the command functions.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Path to the workspace manifest to rewrite.
    pub manifest_path: PathBuf,

    /// Root directory containing candidate application directories.
    /// `None` when no scan is performed (delete mode).
    pub apps_root: Option<PathBuf>,

    /// Member path prefix owned by this tool.
    pub prefix: String,

    /// Extra directory names to skip while scanning, on top of
    /// [`DEFAULT_IGNORE_DIRS`].
    pub ignore: Vec<String>,

    /// Whether update mode writes the dependency pin line.
    pub write_pin: bool,
}

impl SyncContext {
    /// Creates a new `SyncContext`, validating that the manifest exists and
    /// that the application root, when given, is a readable directory.
    ///
    /// # Errors
    /// Returns an error if the manifest path is not an existing file or the
    /// application root is not an existing directory.
    pub fn new(
        manifest_path: PathBuf,
        apps_root: Option<PathBuf>,
        prefix: String,
        ignore: Vec<String>,
        write_pin: bool,
    ) -> Result<Self> {
        if !manifest_path.is_file() {
            return Err(anyhow::anyhow!(
                "Manifest not found: {}",
                manifest_path.display()
            ));
        }
        if let Some(root) = &apps_root
            && !root.is_dir()
        {
            return Err(anyhow::anyhow!(
                "Application root is not a directory: {}",
                root.display()
            ));
        }
        Ok(Self {
            manifest_path,
            apps_root,
            prefix,
            ignore,
            write_pin,
        })
    }
}
