//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Doclint - Documentation content and SEO validation.
#[derive(Debug, Parser)]
#[command(name = "doclint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate documentation content (default if no command specified)
    Content(ContentArgs),

    /// Validate SEO metadata
    Seo(SeoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `content` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ContentArgs {
    /// Root directory of the documentation tree
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Load schema documents from a directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub schemas: Option<PathBuf>,
}

impl Default for ContentArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            schemas: None,
        }
    }
}

/// Arguments for the `seo` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SeoArgs {
    /// Root directory of the documentation tree
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl Default for SeoArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
