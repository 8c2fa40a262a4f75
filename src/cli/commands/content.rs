//! Content command implementation.
//!
//! The `doclint content` command walks a documentation tree and validates
//! pages, the navigation artifact, and translation files.

use crate::cli::args::ContentArgs;
use crate::content::ContentLinter;
use crate::error::Result;
use crate::report::RunReport;
use crate::schema::SchemaSet;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The content command implementation.
pub struct ContentCommand {
    args: ContentArgs,
}

impl ContentCommand {
    /// Create a new content command.
    pub fn new(args: ContentArgs) -> Self {
        Self { args }
    }

    fn load_schemas(&self) -> Result<SchemaSet> {
        match &self.args.schemas {
            Some(dir) => SchemaSet::from_dir(dir),
            None => SchemaSet::embedded(),
        }
    }
}

impl Command for ContentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schemas = match self.load_schemas() {
            Ok(schemas) => schemas,
            Err(e) => {
                ui.error(&format!("Error loading schemas: {e}"));
                return Ok(CommandResult::failure(1));
            }
        };
        ui.success("Schemas loaded successfully");
        ui.message("Starting content validation...");

        let mut report = RunReport::new();
        let linter = ContentLinter::new(&schemas);
        linter.run(&self.args.root, &mut report, ui);

        report.render("Content Validation Report", ui);

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
