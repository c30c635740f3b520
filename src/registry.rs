//! The per-file registration context.
//!
//! A fresh [`Registry`] is created for every test file and passed by mutable
//! reference into the file-loading call; the loader takes the populated case
//! list back out with [`Registry::into_cases`]. Because the registry is
//! consumed per file, no registration state can leak from one file load into
//! the next.

use crate::check::CheckResult;

/// A test case's executable body.
pub type CaseFn = Box<dyn Fn() -> CheckResult>;

/// A labeled, zero-argument unit of test logic.
///
/// Immutable once registered; owned exclusively by the case list it was
/// appended to.
pub struct TestCase {
    pub label: String,
    pub action: CaseFn,
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The collection that receives case declarations while one file is loaded.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a case. Cases run in registration order.
    pub fn case(&mut self, label: impl Into<String>, action: impl Fn() -> CheckResult + 'static) {
        self.cases.push(TestCase {
            label: label.into(),
            action: Box::new(action),
        });
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Consumes the registry, yielding its cases in registration order.
    pub fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }
}
