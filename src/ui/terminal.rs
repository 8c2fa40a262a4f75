//! Terminal UI implementation.

use std::io::Write;

use console::Term;

use super::{should_use_colors, DoclintTheme, OutputMode, UserInterface};

/// Terminal UI implementation writing styled output to stdout.
pub struct TerminalUI {
    term: Term,
    theme: DoclintTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoclintTheme::new()
        } else {
            DoclintTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn progress(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.success.apply_to(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.warning.apply_to(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.error.apply_to(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.header.apply_to(title)).ok();
        writeln!(self.term, "{}", "=".repeat(title.chars().count())).ok();
    }
}
