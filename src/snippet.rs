//! Recovery of the literal source line behind a failed check.

use std::fs;

/// Source location recorded by the check primitive at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

/// Reads the trimmed text of the recorded line, 1-based.
///
/// Returns `None` when the file cannot be read or the line index is out of
/// range; the failure is then reported without a snippet.
pub fn source_line(site: &CallSite) -> Option<String> {
    if site.line == 0 {
        return None;
    }
    let contents = fs::read_to_string(site.file).ok()?;
    let line = contents.lines().nth(site.line as usize - 1)?;
    Some(line.trim().to_string())
}
