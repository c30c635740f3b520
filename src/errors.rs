//! Harness-level errors.
//!
//! These cover the fatal tier of the error taxonomy: anything that goes
//! wrong while walking the test tree or loading a test file. They are never
//! a test outcome; the CLI renders them as miette diagnostics and exits with
//! the unexpected-error status. Expected test failures travel separately as
//! [`crate::check::CheckFailure`].

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("failed to walk test directory: {source}")]
    #[diagnostic(code(crucible::walk))]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    #[error("failed to read test file {}", path.display())]
    #[diagnostic(code(crucible::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed test file {}: {message}", path.display())]
    #[diagnostic(
        code(crucible::parse),
        help("a test file is a YAML sequence of case declarations")
    )]
    Malformed { path: PathBuf, message: String },

    #[error("case {label:?} in {} declares no runnable check", path.display())]
    #[diagnostic(
        code(crucible::registration),
        help("declare either `holds` or both `actual` and `expected`")
    )]
    BogusCase { path: PathBuf, label: String },
}
