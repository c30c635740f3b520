//! The assertion engine: the boolean check primitive consumed by test cases
//! and the structural deep-equality comparator used inside it.
//!
//! A failed check produces a [`CheckFailure`] carrying the call site of the
//! check itself, captured via `#[track_caller]` at invocation time. The
//! reporter later resolves that site back to the literal source line, which
//! only stays meaningful if each `ensure(...)` call is written as a single,
//! self-contained expression on its own line.

use serde_json::Value;

use crate::snippet::CallSite;

/// The result of a single check, and the return type of every test action.
pub type CheckResult = Result<(), CheckFailure>;

/// Expected-failure signal raised when a boolean check does not hold.
///
/// Carries a human message and, when raised through [`ensure`], the source
/// location of the failing check. It is consumed by the execution runner;
/// anything else signaled during a case (a panic) is an unexpected error,
/// not a `CheckFailure`.
#[derive(Debug, Clone)]
pub struct CheckFailure {
    pub message: String,
    pub site: Option<CallSite>,
}

impl CheckFailure {
    /// A failure with a message but no recorded call site. The reporter
    /// prints such failures without a source snippet.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            site: None,
        }
    }
}

impl std::fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The boolean check primitive.
///
/// Returns `Ok(())` when the expression holds; otherwise a [`CheckFailure`]
/// with the message `"Assertion failed."` and the caller's file/line.
/// Intended to be propagated with `?` from inside a registered case:
///
/// ```
/// use crucible::{ensure, CheckResult};
///
/// fn action() -> CheckResult {
///     ensure(2 + 2 == 4)?;
///     Ok(())
/// }
/// ```
#[track_caller]
pub fn ensure(expr: bool) -> CheckResult {
    if expr {
        return Ok(());
    }
    let location = std::panic::Location::caller();
    Err(CheckFailure {
        message: "Assertion failed.".to_string(),
        site: Some(CallSite {
            file: location.file(),
            line: location.line(),
        }),
    })
}

/// Structural subset-shape equality over JSON-like values.
///
/// The comparator validates that `actual` contains at least the shape of
/// `expected`:
///
/// - For two objects, every key of `expected` must exist in `actual` and
///   match; keys present only in `actual` are tolerated. This asymmetry is
///   intentional.
/// - For two arrays, the same rule applies over indices.
/// - Anything else compares by strict type-and-value equality, so `1` and
///   `"1"` are never equal.
///
/// Returns a plain boolean and never fails the process. On mismatch a short
/// diagnostic is written to stderr; that text is advisory only and not part
/// of the return contract.
pub fn deep_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            if actual.len() < expected.len() {
                eprintln!("Key size mismatch");
                return false;
            }
            for (key, expected_value) in expected {
                let Some(actual_value) = actual.get(key) else {
                    eprintln!("Key not existing: {}", key);
                    return false;
                };
                if !values_match(actual_value, expected_value) {
                    return false;
                }
            }
            true
        }
        (Value::Array(actual), Value::Array(expected)) => {
            if actual.len() < expected.len() {
                eprintln!("Key size mismatch");
                return false;
            }
            for (index, expected_value) in expected.iter().enumerate() {
                if !values_match(&actual[index], expected_value) {
                    return false;
                }
            }
            true
        }
        (actual, expected) => actual == expected,
    }
}

/// Recurse when the expected side is composite, otherwise compare strictly.
fn values_match(actual: &Value, expected: &Value) -> bool {
    if expected.is_object() || expected.is_array() {
        if !deep_eq(actual, expected) {
            eprintln!("Nested value not equal");
            return false;
        }
        return true;
    }
    if actual != expected {
        eprintln!("Value not equal");
        return false;
    }
    true
}
