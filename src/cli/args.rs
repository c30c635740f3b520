//! Defines the command-line arguments and subcommands for the harness.
//!
//! Uses the `clap` crate with its "derive" feature for a declarative and
//! type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "crucible",
    version,
    about = "A minimal directory-driven test harness."
)]
pub struct HarnessArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover and run all test files under a directory.
    Run {
        /// Root of the test tree, laid out as <root>/<module>/<file>.yaml.
        #[arg(default_value = "tests")]
        path: PathBuf,
    },
    /// List discovered modules, files, and case counts without running.
    List {
        /// Root of the test tree.
        #[arg(default_value = "tests")]
        path: PathBuf,
    },
}
