// Regression tests: exit-code law and stderr-only output contract.
// Requires: assert_cmd, predicates, tempfile crates in [dev-dependencies]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn crucible() -> Command {
    Command::cargo_bin("crucible").unwrap()
}

#[test]
fn all_passing_run_exits_zero_with_stderr_only_output() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "math/add.yaml",
        "- label: one plus one\n  holds: true\n- label: shapes\n  actual: { a: 1, b: 2, c: 3 }\n  expected: { a: 1, b: 2 }\n",
    );

    crucible()
        .arg("run")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(
            contains("* math")
                .and(contains("    - add"))
                .and(contains("pass"))
                .and(contains("Num Tests Passed: 2"))
                .and(contains("Num Tests Failed: 0")),
        );
}

#[test]
fn a_failing_case_exits_one_and_keeps_running() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "math/mixed.yaml",
        "- label: wrong\n  holds: false\n- label: right\n  holds: true\n",
    );

    crucible()
        .arg("run")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(
            contains("fail")
                .and(contains("Assertion failed."))
                .and(contains("Num Tests Passed: 1"))
                .and(contains("Num Tests Failed: 1")),
        );
}

#[test]
fn a_malformed_test_file_aborts_with_127() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "math/broken.yaml", "{ not a sequence");

    crucible()
        .arg("run")
        .arg(tmp.path())
        .assert()
        .code(127)
        .stderr(contains("crucible::parse").or(contains("malformed test file")));
}

#[test]
fn a_case_without_a_check_aborts_with_127() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "math/empty.yaml", "- label: declares nothing\n");

    crucible()
        .arg("run")
        .arg(tmp.path())
        .assert()
        .code(127)
        .stderr(contains("crucible::registration").or(contains("declares no runnable check")));
}

#[test]
fn list_prints_the_tree_without_running() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "math/add.yaml",
        "- label: would fail\n  holds: false\n",
    );

    crucible()
        .arg("list")
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(contains("* math").and(contains("    - add (1 cases)")));
}
