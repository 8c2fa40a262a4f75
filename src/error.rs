//! Error types for doclint operations.
//!
//! This module defines [`DoclintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Schema loading failures are fatal and abort the run before any file
//!   is visited
//! - Every per-file failure is recovered locally and recorded as a finding,
//!   so only the startup path ever returns a [`DoclintError`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for doclint operations.
#[derive(Debug, Error)]
pub enum DoclintError {
    /// A schema document could not be read from disk.
    #[error("Failed to read schema {name} from {path}: {message}")]
    SchemaRead {
        name: &'static str,
        path: PathBuf,
        message: String,
    },

    /// A schema document is not valid JSON.
    #[error("Failed to parse schema {name}: {message}")]
    SchemaParse {
        name: &'static str,
        message: String,
    },

    /// A schema document does not define the expected entity.
    #[error("Schema {name} does not define entity '{entity}'")]
    SchemaEntityMissing {
        name: &'static str,
        entity: &'static str,
    },

    /// A schema entity could not be compiled into a validator.
    #[error("Failed to compile schema entity '{entity}': {message}")]
    SchemaCompile {
        entity: &'static str,
        message: String,
    },
}

/// Result type alias for doclint operations.
pub type Result<T> = std::result::Result<T, DoclintError>;
