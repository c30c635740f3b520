//! The harness command-line interface.
//!
//! This module is the entry point for all CLI commands and is the only
//! place that terminates the process: exit 0 when every case passed, 1 when
//! at least one check failed, 127 when the run was stopped by an unexpected
//! error or the test tree could not be loaded.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, HarnessArgs};
use crate::errors::HarnessError;
use crate::loader::{self, Module, YamlLoader};
use crate::report::Reporter;
use crate::runner::{self, EXIT_ABORTED};

pub mod args;

/// The main entry point for the CLI.
pub fn run() -> ! {
    let args = HarnessArgs::parse();

    match args.command {
        Command::Run { path } => {
            let modules = load_or_exit(&path);
            let mut reporter = Reporter::stderr();
            let outcome = runner::run(&modules, &mut reporter);
            process::exit(runner::exit_code(&outcome));
        }
        Command::List { path } => {
            let modules = load_or_exit(&path);
            list_modules(&modules);
            process::exit(0);
        }
    }
}

/// Loads the test tree, or renders the diagnostic and exits 127.
///
/// A load failure is harness misuse, not a test outcome, so it shares the
/// unexpected-error status.
fn load_or_exit(path: &Path) -> Vec<Module> {
    match loader::load_directory(path, &YamlLoader) {
        Ok(modules) => modules,
        Err(error) => {
            report_fatal(error);
            process::exit(EXIT_ABORTED);
        }
    }
}

fn report_fatal(error: HarnessError) {
    eprintln!("{:?}", miette::Report::new(error));
}

fn list_modules(modules: &[Module]) {
    for module in modules {
        eprintln!("* {}", module.name);
        for file in &module.files {
            eprintln!("    - {} ({} cases)", file.stem, file.cases.len());
        }
    }
}
