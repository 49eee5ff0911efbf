//! Command-line interface definitions for memsync.
//!
//! This module contains all CLI argument parsing structures using clap's
//! derive macros. The definitions are shared between the main binary and
//! build tools (like xtask) for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for memsync.
#[derive(Parser)]
#[command(
    name = "memsync",
    version = crate::VERSION,
    about = "Keep a workspace manifest's member list in sync with the directories on disk",
    long_about = "Scans an application root one level deep and rewrites the manifest's \
                  `members` block in place, replacing every entry under the owned path prefix"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rescan application directories and rewrite the member list
    Update {
        /// Path to the workspace manifest to rewrite
        manifest: PathBuf,

        /// Root directory containing candidate application directories
        apps_root: PathBuf,

        /// Member path prefix owned by this tool
        #[arg(long, env = "MEMSYNC_PREFIX", default_value = crate::DEFAULT_MEMBER_PREFIX)]
        prefix: String,

        /// Directory name to skip while scanning (repeatable)
        #[arg(long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,

        /// Do not write the dependency pin line
        #[arg(long)]
        no_pin: bool,
    },

    /// Remove all owned member entries and the dependency pin
    Delete {
        /// Path to the workspace manifest to rewrite
        manifest: PathBuf,

        /// Member path prefix owned by this tool
        #[arg(long, env = "MEMSYNC_PREFIX", default_value = crate::DEFAULT_MEMBER_PREFIX)]
        prefix: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
