//! Discovery and isolation behavior of the directory loader, exercised
//! against real on-disk trees.

use std::fs;
use std::path::Path;

use crucible::{load_directory, Module, YamlLoader};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn labels(module: &Module, stem: &str) -> Vec<String> {
    module
        .files
        .iter()
        .find(|f| f.stem == stem)
        .unwrap()
        .cases
        .iter()
        .map(|c| c.label.clone())
        .collect()
}

const PASSING_FILE: &str = "- label: trivially true\n  holds: true\n";

#[test]
fn discovers_modules_and_files_skipping_hidden_entries() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "math/add.yaml", PASSING_FILE);
    write(root, "math/.wip.yaml", PASSING_FILE);
    write(root, "math/notes.txt", "not a test file");
    write(root, "strings/concat.yaml", PASSING_FILE);
    write(root, ".hidden/skipme.yaml", PASSING_FILE);
    write(root, "stray.yaml", PASSING_FILE);

    let modules = load_directory(root, &YamlLoader).unwrap();

    let mut names: Vec<_> = modules.iter().map(|m| m.name.clone()).collect();
    names.sort();
    assert_eq!(names, ["math", "strings"]);

    let math = modules.iter().find(|m| m.name == "math").unwrap();
    let stems: Vec<_> = math.files.iter().map(|f| f.stem.clone()).collect();
    assert_eq!(stems, ["add"]);
    assert_eq!(math.files[0].cases.len(), 1);
}

#[test]
fn a_module_directory_with_no_test_files_still_appears() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("empty")).unwrap();

    let modules = load_directory(root, &YamlLoader).unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "empty");
    assert!(modules[0].files.is_empty());
}

#[test]
fn files_register_in_isolation() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(
        root,
        "m/a.yaml",
        "- label: a one\n  holds: true\n- label: a two\n  holds: true\n",
    );
    write(root, "m/b.yaml", "- label: b one\n  holds: false\n");

    let modules = load_directory(root, &YamlLoader).unwrap();
    let module = &modules[0];

    let a = labels(module, "a");
    let b = labels(module, "b");
    assert_eq!(a, ["a one", "a two"]);
    assert_eq!(b, ["b one"]);
    assert!(a.iter().all(|label| !b.contains(label)));
}

#[test]
fn loading_twice_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "m/a.yaml", PASSING_FILE);
    write(
        root,
        "n/b.yaml",
        "- label: shape\n  actual: { a: 1, b: 2 }\n  expected: { a: 1 }\n",
    );

    let shape = |modules: &[Module]| -> Vec<(String, Vec<(String, Vec<String>)>)> {
        modules
            .iter()
            .map(|m| {
                (
                    m.name.clone(),
                    m.files
                        .iter()
                        .map(|f| {
                            (
                                f.stem.clone(),
                                f.cases.iter().map(|c| c.label.clone()).collect(),
                            )
                        })
                        .collect(),
                )
            })
            .collect()
    };

    let first = load_directory(root, &YamlLoader).unwrap();
    let second = load_directory(root, &YamlLoader).unwrap();
    assert_eq!(shape(&first), shape(&second));
}

#[test]
fn a_malformed_file_fails_the_whole_load() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "m/good.yaml", PASSING_FILE);
    write(root, "m/bad.yaml", "{ not a sequence");

    assert!(load_directory(root, &YamlLoader).is_err());
}
