//! JSON Schema loading and compilation.
//!
//! Three schema documents describe the entities doclint validates:
//!
//! - `content-api.json` — `DocumentationPage` (frontmatter + body subject)
//! - `navigation.json` — `NavigationStructure` (the navigation artifact)
//! - `i18n.json` — `TranslationStructure` (translation JSON files)
//!
//! Each document is a JSON object keyed by its entity name. Copies of all
//! three ship embedded in the binary; `--schemas <DIR>` loads the same
//! filenames from a directory instead. Loading happens once at startup and
//! is fail-fast: a missing file, a JSON parse error, a missing entity key,
//! or a compile failure aborts the run before any file is visited.
//!
//! Compiled [`jsonschema::Validator`] handles are immutable and are
//! injected into the content linter, so validation itself is a pure check.

use std::fmt;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{DoclintError, Result};

const CONTENT_API_SCHEMA: &str = include_str!("../schemas/content-api.json");
const NAVIGATION_SCHEMA: &str = include_str!("../schemas/navigation.json");
const I18N_SCHEMA: &str = include_str!("../schemas/i18n.json");

/// Schema document filenames, also used when loading from a directory.
pub const CONTENT_API_FILE: &str = "content-api.json";
pub const NAVIGATION_FILE: &str = "navigation.json";
pub const I18N_FILE: &str = "i18n.json";

/// A single schema violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root) {}", self.message)
        } else {
            write!(f, "{} {}", self.instance_path, self.message)
        }
    }
}

/// The three compiled schema validators, built once at startup.
#[derive(Debug)]
pub struct SchemaSet {
    page: Validator,
    navigation: Validator,
    i18n: Validator,
}

impl SchemaSet {
    /// Compile the validators from the embedded schema documents.
    pub fn embedded() -> Result<Self> {
        Self::from_sources(CONTENT_API_SCHEMA, NAVIGATION_SCHEMA, I18N_SCHEMA)
    }

    /// Compile the validators from schema documents found in `dir`.
    ///
    /// Expects the same three filenames as the embedded set. Any missing
    /// or unreadable file is a fatal [`DoclintError::SchemaRead`].
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &'static str| -> Result<String> {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| DoclintError::SchemaRead {
                name,
                path,
                message: e.to_string(),
            })
        };

        let content_api = read(CONTENT_API_FILE)?;
        let navigation = read(NAVIGATION_FILE)?;
        let i18n = read(I18N_FILE)?;
        Self::from_sources(&content_api, &navigation, &i18n)
    }

    fn from_sources(content_api: &str, navigation: &str, i18n: &str) -> Result<Self> {
        Ok(Self {
            page: compile(content_api, CONTENT_API_FILE, "DocumentationPage")?,
            navigation: compile(navigation, NAVIGATION_FILE, "NavigationStructure")?,
            i18n: compile(i18n, I18N_FILE, "TranslationStructure")?,
        })
    }

    /// Validate a documentation-page subject; empty means valid.
    pub fn validate_page(&self, instance: &Value) -> Vec<Violation> {
        violations(&self.page, instance)
    }

    /// Validate a navigation structure; empty means valid.
    pub fn validate_navigation(&self, instance: &Value) -> Vec<Violation> {
        violations(&self.navigation, instance)
    }

    /// Validate a translation structure; empty means valid.
    pub fn validate_i18n(&self, instance: &Value) -> Vec<Violation> {
        violations(&self.i18n, instance)
    }
}

/// Parse a schema document, extract the entity definition, and compile it.
fn compile(source: &str, name: &'static str, entity: &'static str) -> Result<Validator> {
    let document: Value =
        serde_json::from_str(source).map_err(|e| DoclintError::SchemaParse {
            name,
            message: e.to_string(),
        })?;

    let schema = document
        .get(entity)
        .ok_or(DoclintError::SchemaEntityMissing { name, entity })?;

    jsonschema::validator_for(schema).map_err(|e| DoclintError::SchemaCompile {
        entity,
        message: e.to_string(),
    })
}

fn violations(validator: &Validator, instance: &Value) -> Vec<Violation> {
    validator
        .iter_errors(instance)
        .map(|error| Violation {
            instance_path: error.instance_path.to_string(),
            message: error.to_string(),
        })
        .collect()
}
