//! Run report aggregation.
//!
//! This module provides the types a lint run accumulates its results in:
//!
//! - [`Severity`] - Error (fails the run) or Warning (informational)
//! - [`Finding`] - A single reported issue tied to a file path
//! - [`RunReport`] - Counters and findings for one traverse-and-validate run
//!
//! Findings are write-once and append-only; their ordering follows the
//! traversal order and they are never deduplicated. A report is created at
//! run start, rendered at run end, and converted into the process exit code
//! (zero errors means success, warnings never fail the run).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ui::UserInterface;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Should be addressed, never fails the run.
    Warning,
    /// Fails the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported issue, carrying severity, file path, and message.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Severity of this finding.
    pub severity: Severity,
    /// The file the finding originated from.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Aggregated results of a single lint run.
#[derive(Debug, Default)]
pub struct RunReport {
    validated_files: usize,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl RunReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error finding for `path`.
    pub fn error(&mut self, path: &Path, message: impl Into<String>) {
        self.errors.push(Finding {
            severity: Severity::Error,
            path: path.to_path_buf(),
            message: message.into(),
        });
    }

    /// Record a warning finding for `path`.
    pub fn warning(&mut self, path: &Path, message: impl Into<String>) {
        self.warnings.push(Finding {
            severity: Severity::Warning,
            path: path.to_path_buf(),
            message: message.into(),
        });
    }

    /// Increment the validated-file counter.
    ///
    /// Called exactly once per file a validator accepts, regardless of how
    /// many findings that file produces.
    pub fn count_file(&mut self) {
        self.validated_files += 1;
    }

    /// Number of files that were validated.
    pub fn validated_files(&self) -> usize {
        self.validated_files
    }

    /// All error findings, in traversal order.
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// All warning findings, in traversal order.
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// A run succeeds when no error was recorded; warnings do not count.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the final report section through the UI.
    pub fn render(&self, title: &str, ui: &mut dyn UserInterface) {
        ui.show_header(title);
        ui.message(&format!("Files validated: {}", self.validated_files));
        ui.message(&format!("Errors: {}", self.errors.len()));
        ui.message(&format!("Warnings: {}", self.warnings.len()));

        if !self.errors.is_empty() {
            ui.message("");
            ui.message("ERRORS:");
            for finding in &self.errors {
                ui.error(&finding.to_string());
            }
        }

        if !self.warnings.is_empty() {
            ui.message("");
            ui.message("WARNINGS:");
            for finding in &self.warnings {
                ui.warning(&finding.to_string());
            }
        }

        if self.errors.is_empty() && self.warnings.is_empty() {
            ui.message("");
            ui.success("All validations passed!");
        }
    }
}
