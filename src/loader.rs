//! Test discovery and loading.
//!
//! The discovery process follows this flow:
//! 1. List the root directory; non-hidden subdirectories become modules.
//! 2. List each module directory; non-hidden files with the loader's
//!    extension become test files, identified by their stem.
//! 3. Load each test file against a fresh [`Registry`], storing the
//!    registered cases under the stem.
//!
//! Directory iteration order is whatever the underlying listing yields; no
//! sorting is imposed, so the order is stable within one run but not
//! normative across platforms.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use crate::check::CheckFailure;
use crate::errors::HarnessError;
use crate::registry::{Registry, TestCase};

/// Entries whose name starts with this marker are skipped at every level.
const HIDDEN_MARKER: char = '.';

/// A module's worth of loaded test files, in discovery order.
#[derive(Debug)]
pub struct Module {
    pub name: String,
    pub files: Vec<FileCases>,
}

/// The cases registered by one test file, in registration order.
#[derive(Debug)]
pub struct FileCases {
    pub stem: String,
    pub cases: Vec<TestCase>,
}

/// The explicit module-loading interface.
///
/// Implementors interpret one test file's declarations against the fresh
/// registry handed to them; no state crosses calls. The directory walk only
/// offers files carrying [`FileLoader::extension`].
pub trait FileLoader {
    /// The test-file extension, without the leading dot.
    fn extension(&self) -> &str;

    /// Executes the file's top-level test declarations against `registry`.
    fn load(&self, path: &Path, registry: &mut Registry) -> Result<(), HarnessError>;
}

/// Walks `root/<module>/<stem>.<ext>` and loads every test file in
/// isolation, producing the full module collection.
pub fn load_directory(
    root: &Path,
    loader: &dyn FileLoader,
) -> Result<Vec<Module>, HarnessError> {
    let mut modules = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() || is_hidden(entry.path()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let files = load_module_dir(entry.path(), loader)?;
        modules.push(Module { name, files });
    }
    Ok(modules)
}

fn load_module_dir(dir: &Path, loader: &dyn FileLoader) -> Result<Vec<FileCases>, HarnessError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || is_hidden(path) {
            continue;
        }
        if !path
            .extension()
            .is_some_and(|ext| ext == loader.extension())
        {
            continue;
        }
        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        // One fresh registry per file; consuming it afterwards is what
        // guarantees registration isolation between files.
        let mut registry = Registry::new();
        loader.load(path, &mut registry)?;
        files.push(FileCases {
            stem,
            cases: registry.into_cases(),
        });
    }
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(HIDDEN_MARKER))
        .unwrap_or(false)
}

/// A single declared case in a YAML test file.
///
/// Exactly one check must be declared: either `holds`, or the
/// `actual`/`expected` pair (compared with [`crate::check::deep_eq`]).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseSpec {
    label: String,
    #[serde(default)]
    holds: Option<bool>,
    #[serde(default)]
    actual: Option<Value>,
    #[serde(default)]
    expected: Option<Value>,
}

/// The built-in declarative loader: a test file is a YAML sequence of
/// [`CaseSpec`] declarations.
#[derive(Debug, Default)]
pub struct YamlLoader;

impl FileLoader for YamlLoader {
    fn extension(&self) -> &str {
        "yaml"
    }

    fn load(&self, path: &Path, registry: &mut Registry) -> Result<(), HarnessError> {
        let contents = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let specs: Vec<CaseSpec> =
            serde_yaml::from_str(&contents).map_err(|e| HarnessError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for spec in specs {
            register_spec(path, spec, registry)?;
        }
        Ok(())
    }
}

fn register_spec(
    path: &Path,
    spec: CaseSpec,
    registry: &mut Registry,
) -> Result<(), HarnessError> {
    match (spec.holds, spec.actual, spec.expected) {
        (Some(holds), None, None) => {
            registry.case(spec.label, move || {
                if holds {
                    Ok(())
                } else {
                    Err(CheckFailure::message_only("Assertion failed."))
                }
            });
            Ok(())
        }
        (None, Some(actual), Some(expected)) => {
            registry.case(spec.label, move || {
                if crate::check::deep_eq(&actual, &expected) {
                    Ok(())
                } else {
                    Err(CheckFailure::message_only(
                        "Value does not match expected shape.",
                    ))
                }
            });
            Ok(())
        }
        (None, None, None) => Err(HarnessError::BogusCase {
            path: path.to_path_buf(),
            label: spec.label,
        }),
        (None, Some(_), None) | (None, None, Some(_)) => Err(HarnessError::Malformed {
            path: path.to_path_buf(),
            message: format!(
                "case {:?} declares only half of the actual/expected pair",
                spec.label
            ),
        }),
        (Some(_), _, _) => Err(HarnessError::Malformed {
            path: path.to_path_buf(),
            message: format!("case {:?} declares more than one check", spec.label),
        }),
    }
}
