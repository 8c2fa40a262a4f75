//! Content linter: schema validation plus custom content rules.
//!
//! Walks a documentation tree and validates three kinds of files:
//!
//! - `.md` / `.mdx` pages — parsed into frontmatter + body, shaped into a
//!   `DocumentationPage` subject, schema-checked, then run through the
//!   custom rules in [`rules`]
//! - `navigation.json` — schema-checked against `NavigationStructure`
//! - `.json` files under an `i18n` path segment — schema-checked against
//!   `TranslationStructure`
//!
//! The content linter deliberately has no directory exclusion list: it
//! descends into every subdirectory, unlike the SEO linter. Per-file parse
//! failures become error findings; nothing here is fatal.

pub mod rules;

use std::fs;
use std::path::{Component, Path};

use chrono::Local;
use serde_json::{json, Value};

use crate::frontmatter::{self, is_truthy, Document};
use crate::report::RunReport;
use crate::schema::SchemaSet;
use crate::ui::UserInterface;
use crate::walker::Walker;

/// File name of the navigation artifact.
const NAVIGATION_FILE_NAME: &str = "navigation.json";

/// Path segment marking translation data.
const I18N_SEGMENT: &str = "i18n";

/// The content linter, holding compiled schema validators.
pub struct ContentLinter<'a> {
    schemas: &'a SchemaSet,
}

impl<'a> ContentLinter<'a> {
    /// Create a content linter backed by `schemas`.
    pub fn new(schemas: &'a SchemaSet) -> Self {
        Self { schemas }
    }

    /// Walk `root` and validate every recognized file into `report`.
    pub fn run(&self, root: &Path, report: &mut RunReport, ui: &mut dyn UserInterface) {
        let walker = Walker::new();
        let mut visit = |path: &Path, report: &mut RunReport| {
            self.dispatch(path, report, &mut *ui);
        };
        walker.walk(root, report, &mut visit);
    }

    fn dispatch(&self, path: &Path, report: &mut RunReport, ui: &mut dyn UserInterface) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };

        if name.ends_with(".mdx") || name.ends_with(".md") {
            ui.progress(&format!("Validating: {}", path.display()));
            self.validate_page(path, report);
        } else if name == NAVIGATION_FILE_NAME {
            ui.progress(&format!("Validating navigation: {}", path.display()));
            self.validate_navigation(path, report);
        } else if name.ends_with(".json") && has_i18n_segment(path) {
            ui.progress(&format!("Validating i18n: {}", path.display()));
            self.validate_i18n(path, report);
        } else {
            ui.detail(&format!("Skipping: {}", path.display()));
        }
    }

    /// Validate one documentation page: schema first, then custom rules.
    ///
    /// Both run even when the other fails; only a parse failure skips the
    /// rest of the file.
    pub fn validate_page(&self, path: &Path, report: &mut RunReport) {
        report.count_file();

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                report.error(path, format!("Cannot read file: {e}"));
                return;
            }
        };

        let doc = match frontmatter::parse(&source) {
            Ok(doc) => doc,
            Err(e) => {
                report.error(path, format!("Invalid frontmatter: {e}"));
                return;
            }
        };

        let subject = build_subject(&doc);
        for violation in self.schemas.validate_page(&subject) {
            report.error(path, violation.to_string());
        }

        rules::check(path, &doc, report);
    }

    /// Validate the navigation artifact against its schema.
    pub fn validate_navigation(&self, path: &Path, report: &mut RunReport) {
        let Some(value) = read_json(path, report) else {
            return;
        };
        for violation in self.schemas.validate_navigation(&value) {
            report.error(path, violation.to_string());
        }
    }

    /// Validate a translation file against its schema.
    pub fn validate_i18n(&self, path: &Path, report: &mut RunReport) {
        let Some(value) = read_json(path, report) else {
            return;
        };
        for violation in self.schemas.validate_i18n(&value) {
            report.error(path, violation.to_string());
        }
    }
}

/// Shape a parsed document into the object the `DocumentationPage` schema
/// expects.
///
/// `lastModified` defaults to today's date (YYYY-MM-DD) when the
/// frontmatter leaves it out or empty; the source file is never rewritten.
fn build_subject(doc: &Document) -> Value {
    let mut metadata = doc.metadata.clone();

    let present = metadata.get("lastModified").map(is_truthy).unwrap_or(false);
    if !present {
        metadata.insert(
            "lastModified".to_string(),
            Value::String(Local::now().format("%Y-%m-%d").to_string()),
        );
    }

    json!({ "metadata": metadata, "content": doc.body })
}

/// Whether any path component is exactly the i18n marker segment.
fn has_i18n_segment(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == I18N_SEGMENT))
}

/// Read and parse a JSON artifact; a failure becomes one error finding.
fn read_json(path: &Path, report: &mut RunReport) -> Option<Value> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            report.error(path, format!("Cannot read file: {e}"));
            return None;
        }
    };

    match serde_json::from_str(&source) {
        Ok(value) => Some(value),
        Err(e) => {
            report.error(path, format!("Invalid JSON: {e}"));
            None
        }
    }
}
