//! Custom content rules.
//!
//! Hand-written checks that run after schema validation, independent of its
//! outcome:
//!
//! | Rule | Severity | What it checks |
//! |------|----------|----------------|
//! | keyword | error | title+description+body mention a keyword variant |
//! | tags | warning | at least one tag contains a keyword variant |
//! | length | warning | body is at least 100 characters |
//! | links | warning | relative markdown links resolve to an existing page |

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::frontmatter::Document;
use crate::keywords::contains_any_variant;
use crate::report::RunReport;

/// Minimum body length before a short-content warning is raised.
const MIN_BODY_CHARS: usize = 100;

/// Markdown inline links: `[text](target)`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Run every custom rule against one parsed page.
pub fn check(path: &Path, doc: &Document, report: &mut RunReport) {
    check_keywords(path, doc, report);
    check_tags(path, doc, report);
    check_body_length(path, doc, report);
    check_links(path, doc, report);
}

fn metadata_str<'a>(doc: &'a Document, key: &str) -> &'a str {
    doc.metadata.get(key).and_then(Value::as_str).unwrap_or("")
}

/// At least one tag, case-folded, contains a keyword variant as a substring.
pub(crate) fn has_keyword_tag(doc: &Document) -> bool {
    doc.metadata
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .any(|tag| contains_any_variant(&tag.to_lowercase()))
        })
        .unwrap_or(false)
}

fn check_keywords(path: &Path, doc: &Document, report: &mut RunReport) {
    let full_text = format!(
        "{} {} {}",
        metadata_str(doc, "title"),
        metadata_str(doc, "description"),
        doc.body
    )
    .to_lowercase();

    if !contains_any_variant(&full_text) {
        report.error(path, "Content must include 'speckit' or 'spec-kit' keywords");
    }
}

fn check_tags(path: &Path, doc: &Document, report: &mut RunReport) {
    if !has_keyword_tag(doc) {
        report.warning(path, "Tags should include 'speckit' or 'spec-kit'");
    }
}

fn check_body_length(path: &Path, doc: &Document, report: &mut RunReport) {
    let length = doc.body.chars().count();
    if length < MIN_BODY_CHARS {
        report.warning(path, format!("Content is very short ({length} characters)"));
    }
}

/// Check that relative markdown links resolve to an existing `.md`/`.mdx`
/// file next to this page. Absolute URLs and anchors are not checked.
fn check_links(path: &Path, doc: &Document, report: &mut RunReport) {
    let Some(dir) = path.parent() else {
        return;
    };

    for capture in LINK_RE.captures_iter(&doc.body) {
        let target = &capture[2];
        if !target.starts_with("./") && !target.starts_with("../") {
            continue;
        }

        let stripped = target
            .strip_suffix(".mdx")
            .or_else(|| target.strip_suffix(".md"))
            .unwrap_or(target);
        let resolved = dir.join(stripped);

        let exists = ["md", "mdx"].iter().any(|ext| {
            let mut candidate = resolved.clone().into_os_string();
            candidate.push(format!(".{ext}"));
            Path::new(&candidate).exists()
        });

        if !exists {
            report.warning(path, format!("Potential broken link: {target}"));
        }
    }
}
