//! SEO linter: metadata conventions for search-facing documentation.
//!
//! Independent of the schema contracts; every `.md`/`.mdx` page is checked
//! against a fixed rule set:
//!
//! | Rule | Severity | What it checks |
//! |------|----------|----------------|
//! | required fields | error | title, description, tags, seoKeywords present |
//! | title | warning | at most 60 chars, mentions a keyword variant |
//! | description length | error / warning | over 160 chars errors, under 120 warns |
//! | description keyword | warning | mentions a keyword variant |
//! | keyword coverage | error / warning | page mentions a variant; both preferred |
//! | keyword tag | warning | a tag contains a keyword variant |
//! | seoKeywords | error | present, an array, with a keyword-variant entry |
//!
//! Over-length descriptions are errors because external consumers truncate
//! them; under-length is merely suboptimal, so it only warns. Unlike the
//! content linter, the SEO walk skips infrastructure directories.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::frontmatter::{self, is_truthy, Document};
use crate::keywords::{contains_any_variant, KEYWORD_VARIANTS};
use crate::report::RunReport;
use crate::ui::UserInterface;
use crate::walker::Walker;

/// Frontmatter fields every page must carry.
const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "tags", "seoKeywords"];

const TITLE_MAX_CHARS: usize = 60;
const DESCRIPTION_MAX_CHARS: usize = 160;
const DESCRIPTION_MIN_CHARS: usize = 120;

/// Directories that never contain search-facing content.
const EXCLUDED_DIRS: [&str; 5] = ["node_modules", ".git", ".github", "scripts", "seo"];

/// The SEO linter.
#[derive(Debug, Default)]
pub struct SeoLinter;

impl SeoLinter {
    /// Create an SEO linter.
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and validate every documentation page into `report`.
    pub fn run(&self, root: &Path, report: &mut RunReport, ui: &mut dyn UserInterface) {
        let walker = Walker::with_excluded_dirs(&EXCLUDED_DIRS);
        let mut visit = |path: &Path, report: &mut RunReport| {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                return;
            };
            if name.ends_with(".mdx") || name.ends_with(".md") {
                ui.progress(&format!("Validating: {}", path.display()));
                self.validate_file(path, report);
            } else {
                ui.detail(&format!("Skipping: {}", path.display()));
            }
        };
        walker.walk(root, report, &mut visit);
    }

    /// Run the full SEO rule set against one page.
    pub fn validate_file(&self, path: &Path, report: &mut RunReport) {
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

        self.check_required_fields(path, &doc, report);
        self.check_title(path, &doc, report);
        self.check_description(path, &doc, report);
        self.check_keyword_coverage(path, &doc, report);
        self.check_seo_keywords(path, &doc, report);
    }

    fn check_required_fields(&self, path: &Path, doc: &Document, report: &mut RunReport) {
        for field in REQUIRED_FIELDS {
            let present = doc.metadata.get(field).map(is_truthy).unwrap_or(false);
            if !present {
                report.error(path, format!("Missing required field '{field}'"));
            }
        }
    }

    fn check_title(&self, path: &Path, doc: &Document, report: &mut RunReport) {
        let Some(title) = nonempty_str(doc, "title") else {
            return;
        };

        let length = title.chars().count();
        if length > TITLE_MAX_CHARS {
            report.warning(path, format!("Title too long ({length} > {TITLE_MAX_CHARS})"));
        }

        if !contains_any_variant(&title.to_lowercase()) {
            report.warning(path, "Title should include 'speckit' or 'spec-kit'");
        }
    }

    fn check_description(&self, path: &Path, doc: &Document, report: &mut RunReport) {
        let Some(description) = nonempty_str(doc, "description") else {
            return;
        };

        let length = description.chars().count();
        if length > DESCRIPTION_MAX_CHARS {
            report.error(
                path,
                format!("Description too long ({length} > {DESCRIPTION_MAX_CHARS})"),
            );
        }
        if length < DESCRIPTION_MIN_CHARS {
            report.warning(
                path,
                format!("Description too short ({length} < {DESCRIPTION_MIN_CHARS})"),
            );
        }

        if !contains_any_variant(&description.to_lowercase()) {
            report.warning(path, "Description should include 'speckit' or 'spec-kit'");
        }
    }

    fn check_keyword_coverage(&self, path: &Path, doc: &Document, report: &mut RunReport) {
        let full_text = format!(
            "{} {} {}",
            nonempty_str(doc, "title").unwrap_or(""),
            nonempty_str(doc, "description").unwrap_or(""),
            doc.body
        )
        .to_lowercase();

        let [compact, hyphenated] = KEYWORD_VARIANTS;
        let has_compact = full_text.contains(compact);
        let has_hyphenated = full_text.contains(hyphenated);

        if !has_compact && !has_hyphenated {
            report.error(path, "Content must include 'speckit' or 'spec-kit' keywords");
        } else if !(has_compact && has_hyphenated) {
            report.warning(
                path,
                "Consider including both 'speckit' and 'spec-kit' for better SEO",
            );
        }

        if !crate::content::rules::has_keyword_tag(doc) {
            report.warning(path, "Tags should include 'speckit' or 'spec-kit'");
        }
    }

    fn check_seo_keywords(&self, path: &Path, doc: &Document, report: &mut RunReport) {
        let Some(Value::Array(keywords)) = doc.metadata.get("seoKeywords") else {
            report.error(path, "seoKeywords must be an array");
            return;
        };

        let has_keyword = keywords
            .iter()
            .filter_map(Value::as_str)
            .any(|keyword| contains_any_variant(&keyword.to_lowercase()));

        if !has_keyword {
            report.error(
                path,
                "seoKeywords must include 'speckit' or 'spec-kit' variations",
            );
        }
    }
}

fn nonempty_str<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.metadata
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
