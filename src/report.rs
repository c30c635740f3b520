//! Handles all user-facing output for the harness.
//!
//! Everything human-readable goes to the error stream: progress headers,
//! pass/fail tokens, failure snippets, and the final summary. The reporter
//! is generic over [`WriteColor`] so tests can drive it with an in-memory
//! sink instead of a real terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::check::CheckFailure;
use crate::runner::RunTotals;
use crate::snippet;

/// Width the case label is right-padded to before the outcome token.
const LABEL_WIDTH: usize = 110;

/// Indentation in front of a failure detail line.
const DETAIL_PAD: &str = "           ";

pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    /// A reporter on stderr, colored only when stderr is a terminal.
    pub fn stderr() -> Self {
        let choice = if atty::is(atty::Stream::Stderr) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn module(&mut self, name: &str) {
        let _ = writeln!(self.out, "* {}", name);
    }

    pub fn file(&mut self, stem: &str) {
        let _ = writeln!(self.out, "    - {}", stem);
    }

    /// Prints the padded case label, leaving the cursor before the token.
    pub fn case(&mut self, label: &str) {
        let padded = format!("{} ", label);
        let _ = write!(self.out, "        :: {:.<width$} ", padded, width = LABEL_WIDTH);
    }

    pub fn pass(&mut self) {
        self.token("pass", Color::Green);
    }

    /// Prints the `fail` token plus a best-effort detail line: the literal
    /// source line of the failing check when its call site resolves, the
    /// failure message when no site was recorded, nothing when the site is
    /// recorded but unreadable.
    pub fn fail(&mut self, failure: &CheckFailure) {
        self.token("fail", Color::Red);
        match &failure.site {
            Some(site) => {
                if let Some(line) = snippet::source_line(site) {
                    self.detail(&format!("Assertion failed: {}", line));
                }
            }
            None => self.detail(&failure.message),
        }
    }

    pub fn error(&mut self) {
        self.token("error", Color::Red);
    }

    /// Raw diagnostic dump for an aborted case.
    pub fn dump(&mut self, detail: &str) {
        let _ = writeln!(self.out, "{}", detail);
    }

    pub fn summary(&mut self, totals: &RunTotals) {
        let _ = writeln!(self.out, "Num Tests Passed: {}", totals.passed);
        let _ = writeln!(self.out, "Num Tests Failed: {}", totals.failed);
    }

    fn token(&mut self, word: &str, color: Color) {
        let _ = self.out.set_color(ColorSpec::new().set_fg(Some(color)));
        let _ = writeln!(self.out, "{}", word);
        let _ = self.out.reset();
    }

    fn detail(&mut self, text: &str) {
        let _ = write!(self.out, "{}", DETAIL_PAD);
        let _ = self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.reset();
    }
}
