//! SEO command implementation.
//!
//! The `doclint seo` command walks a documentation tree and checks every
//! page's metadata against the SEO rule set.

use crate::cli::args::SeoArgs;
use crate::error::Result;
use crate::report::RunReport;
use crate::seo::SeoLinter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The SEO command implementation.
pub struct SeoCommand {
    args: SeoArgs,
}

impl SeoCommand {
    /// Create a new SEO command.
    pub fn new(args: SeoArgs) -> Self {
        Self { args }
    }
}

impl Command for SeoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Starting SEO validation...");

        let mut report = RunReport::new();
        let linter = SeoLinter::new();
        linter.run(&self.args.root, &mut report, ui);

        report.render("SEO Validation Report", ui);

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
