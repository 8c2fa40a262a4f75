//! Doclint - Documentation content and SEO validation.
//!
//! Doclint is a CLI tool that walks a documentation tree and validates
//! frontmatter-annotated markdown pages against JSON Schema contracts and
//! SEO metadata rules, reporting errors and warnings with a pass/fail exit
//! code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`content`] - Content linter (schema validation and custom rules)
//! - [`error`] - Error types and result aliases
//! - [`frontmatter`] - Frontmatter extraction and YAML-to-JSON conversion
//! - [`keywords`] - Project keyword variants and matching
//! - [`report`] - Findings and run report aggregation
//! - [`schema`] - JSON Schema loading and compilation
//! - [`seo`] - SEO metadata linter
//! - [`ui`] - Terminal output abstraction
//! - [`walker`] - Directory traversal
//!
//! # Example
//!
//! ```
//! use doclint::frontmatter;
//!
//! let doc = frontmatter::parse("---\ntitle: Overview\n---\nBody text").unwrap();
//! assert_eq!(doc.metadata["title"], "Overview");
//! assert_eq!(doc.body, "Body text");
//! ```

pub mod cli;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod keywords;
pub mod report;
pub mod schema;
pub mod seo;
pub mod ui;
pub mod walker;

pub use error::{DoclintError, Result};
