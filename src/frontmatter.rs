//! Frontmatter parsing.
//!
//! Documentation pages carry a YAML metadata block at the top of the file,
//! delimited by `---` lines, followed by the page body:
//!
//! ```text
//! ---
//! title: Spec-Kit Overview
//! tags: [spec-kit]
//! ---
//! Body text...
//! ```
//!
//! The metadata block is parsed with `serde_yaml` and converted into JSON
//! values so it can be fed straight into schema validation. Key order is
//! preserved, and unrecognized keys pass through untouched. A file without
//! a leading `---` line parses as empty metadata plus the whole text as
//! body.

use serde_json::{Map, Value};
use thiserror::Error;

/// Error produced while parsing a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The opening `---` line has no matching closing line.
    #[error("unterminated frontmatter block")]
    Unterminated,

    /// The metadata block is not valid YAML.
    #[error("invalid YAML in frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The metadata block parsed to something other than a mapping.
    #[error("frontmatter must be a YAML mapping")]
    NotAMapping,

    /// The metadata contains a YAML value with no JSON equivalent.
    #[error("unsupported YAML value in frontmatter: {0}")]
    Unsupported(String),
}

/// A parsed documentation page: frontmatter metadata plus body text.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Ordered metadata mapping extracted from the frontmatter block.
    pub metadata: Map<String, Value>,
    /// Everything after the closing `---` line.
    pub body: String,
}

/// Parse `input` into metadata and body.
pub fn parse(input: &str) -> Result<Document, FrontmatterError> {
    let Some(rest) = strip_opening(input) else {
        return Ok(Document {
            metadata: Map::new(),
            body: input.to_string(),
        });
    };

    let (yaml_src, body) = split_closing(rest).ok_or(FrontmatterError::Unterminated)?;

    if yaml_src.trim().is_empty() {
        return Ok(Document {
            metadata: Map::new(),
            body: body.to_string(),
        });
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(yaml_src)?;
    let metadata = match yaml_to_json(yaml)? {
        Value::Object(map) => map,
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok(Document {
        metadata,
        body: body.to_string(),
    })
}

/// JavaScript-style truthiness for metadata values.
///
/// Missing fields, `null`, `false`, the empty string, and zero are falsy.
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return the text after the opening `---` line, or `None` when the file
/// has no frontmatter block.
fn strip_opening(input: &str) -> Option<&str> {
    let (first, rest) = input.split_once('\n')?;
    if first.trim_end() == "---" {
        Some(rest)
    } else {
        None
    }
}

/// Split the text after the opening delimiter into (yaml source, body).
fn split_closing(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Convert a YAML value tree into the equivalent JSON value tree.
///
/// Frontmatter uses only the JSON-compatible subset of YAML; non-string
/// mapping keys are stringified and YAML tags are ignored.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value, FrontmatterError> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| FrontmatterError::Unsupported(format!("float {f}")))?
            } else {
                return Err(FrontmatterError::Unsupported(format!("number {n:?}")));
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, FrontmatterError> =
                seq.into_iter().map(yaml_to_json).collect();
            Value::Array(items?)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(FrontmatterError::Unsupported(format!(
                            "mapping key {other:?}"
                        )))
                    }
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}
