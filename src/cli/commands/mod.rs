//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`doclint content`, `doclint seo`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod completions;
pub mod content;
pub mod dispatcher;
pub mod seo;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
