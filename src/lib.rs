//! Crucible: a minimal directory-driven test harness.
//!
//! Test files live at `root/<module>/<file>.yaml`; each file is loaded in
//! isolation into a fresh [`Registry`], its cases run sequentially, and
//! results are reported to stderr with the source line of a failing check
//! when one can be recovered.

pub use crate::check::{deep_eq, ensure, CheckFailure, CheckResult};
pub use crate::errors::HarnessError;
pub use crate::loader::{load_directory, FileCases, FileLoader, Module, YamlLoader};
pub use crate::registry::{Registry, TestCase};
pub use crate::runner::{exit_code, run, run_case, CaseOutcome, RunOutcome, RunTotals};

pub mod check;
pub mod cli;
pub mod errors;
pub mod loader;
pub mod registry;
pub mod report;
pub mod runner;
pub mod snippet;
