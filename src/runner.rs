//! Sequential execution of the loaded module collection.
//!
//! One case runs to completion before the next begins: modules in discovery
//! order, files in discovery order within a module, cases in registration
//! order within a file. A case that signals a [`CheckFailure`] is counted
//! and the run continues; a case that panics is an unexpected error and the
//! run stops on the spot, with no summary. That fail-fast behavior treats a
//! panic as a harness or environment bug rather than a test outcome.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use termcolor::WriteColor;

use crate::check::CheckFailure;
use crate::loader::Module;
use crate::registry::TestCase;
use crate::report::Reporter;

/// A run with one or more failed cases exits with this status.
pub const EXIT_FAILED: i32 = 1;

/// A run stopped by an unexpected error exits with this status.
pub const EXIT_ABORTED: i32 = 127;

/// Run-wide counters, created once per run and mutated only here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub passed: usize,
    pub failed: usize,
}

/// Classification of a single case invocation.
#[derive(Debug)]
pub enum CaseOutcome {
    Passed,
    Failed(CheckFailure),
    /// The action panicked; carries the rendered panic payload.
    Aborted(String),
}

/// Result of a whole run.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunTotals),
    Aborted,
}

/// Invokes one case and classifies what happened.
pub fn run_case(case: &TestCase) -> CaseOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| (case.action)())) {
        Ok(Ok(())) => CaseOutcome::Passed,
        Ok(Err(failure)) => CaseOutcome::Failed(failure),
        Err(payload) => CaseOutcome::Aborted(describe_panic(payload.as_ref())),
    }
}

/// Walks the collection, reporting as it goes.
///
/// Returns [`RunOutcome::Aborted`] immediately when a case panics — nothing
/// scheduled after it runs and no summary is printed. Otherwise prints the
/// summary and returns the totals; `passed + failed` equals the number of
/// registered cases.
pub fn run<W: WriteColor>(modules: &[Module], reporter: &mut Reporter<W>) -> RunOutcome {
    let mut totals = RunTotals::default();

    for module in modules {
        reporter.module(&module.name);
        for file in &module.files {
            reporter.file(&file.stem);
            for case in &file.cases {
                reporter.case(&case.label);
                match run_case(case) {
                    CaseOutcome::Passed => {
                        reporter.pass();
                        totals.passed += 1;
                    }
                    CaseOutcome::Failed(failure) => {
                        reporter.fail(&failure);
                        totals.failed += 1;
                    }
                    CaseOutcome::Aborted(dump) => {
                        reporter.error();
                        reporter.dump(&dump);
                        return RunOutcome::Aborted;
                    }
                }
            }
        }
    }

    reporter.summary(&totals);
    RunOutcome::Completed(totals)
}

/// Maps a run outcome to the process exit status.
pub fn exit_code(outcome: &RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Completed(totals) if totals.failed > 0 => EXIT_FAILED,
        RunOutcome::Completed(_) => 0,
        RunOutcome::Aborted => EXIT_ABORTED,
    }
}

fn describe_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
